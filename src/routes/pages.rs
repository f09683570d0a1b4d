use axum::{routing::get, Router};
use crate::handlers::pages::{
    catalog, contact, home, info, product, quote, root, set_theme, submit_contact, submit_quote,
};
use crate::state::AppState;
use crate::views::{info::InfoPage, PageContext};

pub fn routes() -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/theme/{mode}", get(set_theme))
        .route("/{locale}", get(home))
        .route("/{locale}/catalog", get(catalog))
        .route("/{locale}/product/{id}", get(product))
        .route("/{locale}/quote", get(quote).post(submit_quote))
        .route("/{locale}/contact", get(contact).post(submit_contact));

    for page in InfoPage::ALL {
        router = router.route(
            &format!("/{{locale}}/{}", page.slug()),
            get(move |ctx: PageContext| info(ctx, page)),
        );
    }
    router
}
