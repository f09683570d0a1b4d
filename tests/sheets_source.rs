mod common;

use axum::http::StatusCode;
use chemdist_site::config::{AppConfig, SheetsConfig};
use chemdist_site::models::product::Product;
use common::{app, get};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sheets_config(server: &MockServer) -> AppConfig {
    AppConfig {
        sheets: Some(SheetsConfig {
            sheet_id: "sheet-123".into(),
            client_email: "svc@example.iam.gserviceaccount.com".into(),
            // Env files usually carry the key on one line with escaped newlines.
            private_key: format!(
                "\"{}\"",
                include_str!("fixtures/test_service_account.pem").replace('\n', "\\n")
            ),
            sheet_en: "Sheet2".into(),
            sheet_ar: "Sheet1".into(),
            token_url: format!("{}/token", server.uri()),
            api_url: server.uri(),
        }),
        ..Default::default()
    }
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

fn values() -> serde_json::Value {
    json!({
        "range": "Sheet2!A1:J4",
        "majorDimension": "ROWS",
        "values": [
            ["id", "name", "category", "cas", "application", "stock", "description", "packaging", "fullDescription", "specifications"],
            ["7", "Titanium Dioxide R-902", "Industrial Pigments", "13463-67-7", "COATINGS", "IN STOCK", "Rutile white", "25kg bag", "High opacity rutile grade.", "{\"TiO2\": \"93 %\"}"],
            ["", "Carbon Black N330", "Industrial Pigments", "1333-86-4", "PLASTICS", "IN STOCK", "Furnace black", "500kg bag"],
            ["9x", "Iron Oxide Red", "Industrial Pigments", "1309-37-1", "COATINGS", "BACKORDER", "Red oxide", "25kg bag", "", "not json"]
        ]
    })
}

#[tokio::test]
async fn reads_products_from_the_locale_sheet() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/Sheet2"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(values()))
        .mount(&server)
        .await;

    let (status, body) = get(app(sheets_config(&server)), "/api/products?locale=en").await;
    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_str(&body).unwrap();

    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![7, 2, 9]);
    assert_eq!(products[0].full_description.as_deref(), Some("High opacity rutile grade."));
    assert_eq!(products[0].specifications.get("TiO2").map(String::as_str), Some("93 %"));
    assert!(products[2].specifications.is_empty());
}

#[tokio::test]
async fn arabic_reads_the_other_sheet_and_detail_filters_by_id() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/Sheet1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(values()))
        .mount(&server)
        .await;

    let (status, body) = get(app(sheets_config(&server)), "/api/products/9?locale=ar").await;
    assert_eq!(status, StatusCode::OK);
    let product: Product = serde_json::from_str(&body).unwrap();
    assert_eq!(product.name, "Iron Oxide Red");
}

#[tokio::test]
async fn rejected_token_degrades_gracefully() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_grant"))
        .mount(&server)
        .await;

    let (status, body) = get(app(sheets_config(&server)), "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    let (status, _) = get(app(sheets_config(&server)), "/api/products/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejected_values_request_degrades_gracefully() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED" }
        })))
        .expect(3)
        .mount(&server)
        .await;

    let (status, body) = get(app(sheets_config(&server)), "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    let (status, _) = get(app(sheets_config(&server)), "/api/products/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app(sheets_config(&server)), "/en/catalog").await;
    assert_eq!(status, StatusCode::OK);
}
