// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use crate::relay::RelayError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    ValidationError(String),
    Upstream(String),
    Unavailable(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        AppError::Unavailable(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::NotFound(msg) | AppError::ValidationError(msg) => msg.as_str(),
            AppError::Upstream(_) => "Message could not be delivered",
            AppError::Unavailable(msg) => msg.as_str(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::NotConfigured => AppError::unavailable("Message service is not configured"),
            other => AppError::upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_errors_map_to_gateway_statuses() {
        assert_eq!(AppError::from(RelayError::NotConfigured).status(), StatusCode::SERVICE_UNAVAILABLE);
        let rejected = RelayError::Rejected { status: 400, body: "bad template".into() };
        assert_eq!(AppError::from(rejected).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn client_errors_keep_their_statuses() {
        assert_eq!(AppError::not_found("Product not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::validation("Email is required").status(), StatusCode::BAD_REQUEST);
    }
}
