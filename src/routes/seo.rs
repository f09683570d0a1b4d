use axum::{routing::get, Router};
use crate::handlers::seo::{robots, sitemap};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
}
