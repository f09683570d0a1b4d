// src/lib.rs
pub mod catalog;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod relay;
pub mod routes;
pub mod sources;
pub mod state;
pub mod views;

use axum::{routing::get, Router};
use http::{header, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Full application: API, pages, SEO files and `/health`.
pub fn build_app(state: AppState) -> Router {
    routes::create_router()
        .route("/health", get(health_check))
        .fallback(handlers::pages::fallback)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
