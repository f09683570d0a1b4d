#![allow(dead_code)]

use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chemdist_site::{build_app, config::AppConfig, state::AppState};
use tower::ServiceExt;

pub const EN_PRODUCTS: &str = r#"[
  {"id": 1, "name": "EVA Hot Melt 210", "category": "Hot Melt Adhesives", "cas": "24937-78-8", "application": "PACKAGING", "stock": "IN STOCK", "description": "Case and carton sealing", "packaging": "25kg bag"},
  {"id": 2, "name": "C5 Hydrocarbon Resin", "category": "Saturated Resins", "cas": "64742-16-1", "application": "COATINGS", "stock": "BACKORDER", "description": "Tackifier for road marking", "packaging": "25kg bag",
   "fullDescription": "Aliphatic resin for thermoplastic road marking.", "specifications": {"Softening point": "100 °C"}},
  {"id": 3, "name": "Iron Oxide Red 130", "category": "Industrial Pigments", "cas": "1309-37-1", "application": "COATINGS", "stock": "IN STOCK", "description": "Synthetic red oxide", "packaging": "25kg bag"}
]"#;

pub const AR_PRODUCTS: &str = r#"[
  {"id": 1, "name": "لاصق EVA الحراري", "category": "Hot Melt Adhesives", "cas": "24937-78-8", "application": "PACKAGING", "stock": "IN STOCK", "description": "لإغلاق الكراتين", "packaging": "كيس 25 كجم"}
]"#;

/// Temp data dir holding both locale files.
pub fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("products.json"), EN_PRODUCTS).unwrap();
    std::fs::write(dir.path().join("products.ar.json"), AR_PRODUCTS).unwrap();
    dir
}

pub fn file_config(dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

pub fn app(config: AppConfig) -> Router {
    build_app(AppState::with_client(config, reqwest::Client::new()))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let (status, _, body) = send(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, body)
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}
