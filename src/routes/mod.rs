pub mod inquiries;
pub mod pages;
pub mod products;
pub mod seo;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(inquiries::routes())
        .merge(seo::routes())
        .merge(pages::routes())
}
