use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::rest::dto::ErrorBody;
use crate::domain::error::DomainError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// `{"error": ...}` response used by the intake endpoints.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_SERVER_ERROR.to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Map a domain error to its HTTP answer. Internal details stay in the log.
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        DomainError::MissingContactFields | DomainError::MissingField { .. } => {
            ApiError::bad_request(e.to_string())
        }
        DomainError::Database { .. } => {
            tracing::error!(error = %e, "Database error occurred");
            ApiError::internal()
        }
    }
}
