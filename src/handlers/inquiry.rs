// src/handlers/inquiry.rs
use axum::{extract::State, Json};
use crate::dtos::inquiry::{ContactRequest, QuoteRequest, SubmissionResponse};
use crate::models::locale::Locale;
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, info, instrument};

// POST /api/quote - Relay a quote request
#[instrument(skip(state, payload), fields(product = %payload.product))]
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    payload.validate()?;
    let locale = Locale::from_query(payload.locale.as_deref());

    if let Err(e) = state.relay.send_quote(&payload, locale).await {
        error!(error = %e, "Failed to relay quote request");
        return Err(e.into());
    }

    info!("Quote request relayed");
    Ok(Json(SubmissionResponse::sent()))
}

// POST /api/contact - Relay a contact message
#[instrument(skip(state, payload), fields(inquiry = %payload.inquiry))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    payload.validate()?;
    let locale = Locale::from_query(payload.locale.as_deref());

    if let Err(e) = state.relay.send_contact(&payload, locale).await {
        error!(error = %e, "Failed to relay contact message");
        return Err(e.into());
    }

    info!("Contact message relayed");
    Ok(Json(SubmissionResponse::sent()))
}
