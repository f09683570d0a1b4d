mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{app, data_dir, file_config, get, send};

#[tokio::test]
async fn root_redirects_to_english() {
    let dir = data_dir();
    let (status, headers, _) = send(
        app(file_config(dir.path())),
        Request::get("/").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/en");
}

#[tokio::test]
async fn arabic_pages_render_right_to_left() {
    let dir = data_dir();
    let (status, html) = get(app(file_config(dir.path())), "/ar/company").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<html lang="ar" dir="rtl""#));
    assert!(html.contains(r#"href="/en/company" hreflang="en""#));
}

#[tokio::test]
async fn unsupported_locale_is_not_found() {
    let dir = data_dir();
    let (status, html) = get(app(file_config(dir.path())), "/fr/catalog").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn catalog_filters_from_query_parameters() {
    let dir = data_dir();
    let (status, html) = get(
        app(file_config(dir.path())),
        "/en/catalog?application=COATINGS&category=Industrial+Pigments",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Iron Oxide Red 130"));
    assert!(!html.contains("C5 Hydrocarbon Resin</a>"));
    assert!(!html.contains("EVA Hot Melt 210</a>"));
    assert!(html.contains(r#"<a class="chip active""#));
}

#[tokio::test]
async fn catalog_uses_the_locale_partition() {
    let dir = data_dir();
    let (_, html) = get(app(file_config(dir.path())), "/ar/catalog").await;
    assert!(html.contains("لاصق EVA الحراري"));
    assert!(!html.contains("Iron Oxide Red 130"));
}

#[tokio::test]
async fn product_page_and_missing_product() {
    let dir = data_dir();
    let (status, html) = get(app(file_config(dir.path())), "/en/product/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Aliphatic resin for thermoplastic road marking."));
    assert!(html.contains("/en/quote?product=C5+Hydrocarbon+Resin&amp;category=Saturated+Resins"));

    let (status, html) = get(app(file_config(dir.path())), "/en/product/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Product not found"));
}

#[tokio::test]
async fn quote_page_prefills_from_query() {
    let dir = data_dir();
    let (status, html) = get(
        app(file_config(dir.path())),
        "/en/quote?product=Iron+Oxide+Red+130&category=Industrial+Pigments&cas=1309-37-1&application=COATINGS",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<option value="pigments" selected>"#));
    assert!(html.contains(r#"name="cas" value="1309-37-1""#));
    assert!(html.contains(r#"name="application" value="coatings""#));
    // Suggestions narrow to the chosen category.
    assert!(html.contains(r#"<option value="Iron Oxide Red 130">"#));
    assert!(!html.contains(r#"<option value="EVA Hot Melt 210">"#));
}

#[tokio::test]
async fn theme_switch_sets_cookie_and_returns() {
    let dir = data_dir();
    let (status, headers, _) = send(
        app(file_config(dir.path())),
        Request::get("/theme/dark?next=%2Far%2Fcatalog").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/ar/catalog");
    assert!(headers[header::SET_COOKIE].to_str().unwrap().starts_with("theme=dark; Path=/"));

    let request = Request::get("/en")
        .header(header::COOKIE, "theme=dark")
        .body(Body::empty())
        .unwrap();
    let (_, _, html) = send(app(file_config(dir.path())), request).await;
    assert!(html.contains(r#"class="theme-dark""#));
}

#[tokio::test]
async fn theme_switch_returns_to_the_same_catalog_page() {
    let dir = data_dir();
    let (_, html) = get(app(file_config(dir.path())), "/en/catalog?category=Saturated+Resins&page=2").await;
    let link = "/theme/dark?next=%2Fen%2Fcatalog%3Fcategory%3DSaturated%2BResins%26page%3D2";
    assert!(html.contains(link));

    let (status, headers, _) = send(
        app(file_config(dir.path())),
        Request::get(link).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/en/catalog?category=Saturated+Resins&page=2");
}

#[tokio::test]
async fn sitemap_and_robots() {
    let dir = data_dir();
    let (status, xml) = get(app(file_config(dir.path())), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(xml.contains("<loc>https://chemdist-global.com/ar/terms</loc>"));

    let (_, robots) = get(app(file_config(dir.path())), "/robots.txt").await;
    assert!(robots.contains("Sitemap: https://chemdist-global.com/sitemap.xml"));
}
