use axum::{routing::post, Router};
use crate::handlers::inquiry::{submit_contact, submit_quote};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(submit_quote))
        .route("/api/contact", post(submit_contact))
}
