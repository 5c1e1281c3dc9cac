use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use charter_booking::BookingError;
use charter_shared::ApiResponse;

/// Whether 500 responses include the underlying error text in the `error`
/// field. Enabled by the development config, off in production.
static EXPOSE_ERROR_DETAIL: AtomicBool = AtomicBool::new(false);

pub fn set_expose_error_detail(expose: bool) {
    EXPOSE_ERROR_DETAIL.store(expose, Ordering::Relaxed);
}

#[derive(Debug)]
pub enum AppError {
    /// 400 with the fixed "Validation failed" message; the rule breakdown
    /// travels in the `error` field.
    Validation(String),
    /// 400 carrying the message as-is.
    BadRequest(String),
    /// 404 carrying the message as-is.
    NotFound(String),
    /// 500 with a fixed public message; the source is logged.
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl AppError {
    /// Storage failure on a write path; carries the longer public message.
    pub fn store(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Internal {
            message: "Internal server error. Please try again later.",
            source: anyhow::anyhow!(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse) = match self {
            AppError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure_with_detail("Validation failed", detail),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(message))
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ApiResponse::failure(message)),
            AppError::Internal { message, source } => {
                tracing::error!("Internal server error: {:#}", source);
                let body = if EXPOSE_ERROR_DETAIL.load(Ordering::Relaxed) {
                    ApiResponse::failure_with_detail(message, source.to_string())
                } else {
                    ApiResponse::failure(message)
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::Validation(_) => AppError::Validation(message),
            BookingError::PastPickup
            | BookingError::UnknownCity
            | BookingError::UnknownVehicle
            | BookingError::InvalidStatus(_) => AppError::BadRequest(message),
            BookingError::UnknownBooking(_) => AppError::NotFound(message),
            BookingError::Store(source) => AppError::Internal {
                message: "Internal server error. Please try again later.",
                source: anyhow::anyhow!(source),
            },
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AppError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Internal {
            message: "Internal server error",
            source: anyhow::anyhow!(err),
        }
    }
}
