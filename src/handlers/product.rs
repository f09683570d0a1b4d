// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use crate::dtos::product::LocaleQuery;
use crate::models::product::Product;
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, instrument};

// GET /api/products?locale= - List all products for a locale
// An unreachable source degrades to an empty list rather than an error.
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Json<Vec<Product>> {
    let locale = query.locale();
    match state.products.list(locale).await {
        Ok(products) => Json(products),
        Err(e) => {
            error!(error = %e, source = state.products.kind(), %locale, "Failed to fetch products");
            Json(Vec::new())
        }
    }
}

// GET /api/products/{id}?locale= - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Product>, AppError> {
    let Ok(id) = id.trim().parse::<i64>() else {
        return Err(AppError::not_found("Product not found"));
    };
    let locale = query.locale();

    match state.products.find(locale, id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(AppError::not_found("Product not found")),
        Err(e) => {
            error!(error = %e, source = state.products.kind(), id, "Failed to fetch product");
            Err(AppError::not_found("Product not found"))
        }
    }
}
