pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;
use utoipa::ToSchema;

/// Message used when an error carries none of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Internal Server Error";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error envelope returned for every handled error.
///
/// ```json
/// { "message": "Item not found", "errorCode": 404 }
/// ```
///
/// `errorCode` is omitted when the error did not carry one.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Numeric error code, equal to the HTTP status for anticipated errors
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    #[schema(example = 404)]
    pub error_code: Option<u16>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error_code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            error_code,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// `BadRequest` and `NotFound` are the anticipated outcomes a handler
/// decides on itself. Everything else travels as `Forwarded` and is
/// resolved here: status is `status`, else `error_code`, else 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE))]
    Forwarded {
        status: Option<u16>,
        error_code: Option<u16>,
        message: Option<String>,
        source: Option<BoxError>,
    },
}

impl AppError {
    /// Forward an unexpected failure with no status, code or public message.
    ///
    /// Renders as `500 {"message": "Internal Server Error"}`; `source` is logged only.
    pub fn internal(source: impl Into<BoxError>) -> Self {
        AppError::Forwarded {
            status: None,
            error_code: None,
            message: None,
            source: Some(source.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => anticipated(StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => anticipated(StatusCode::NOT_FOUND, message),
            AppError::JsonExtractorRejection(rejection) => {
                let message = rejection.body_text();
                forwarded(Some(400), None, Some(message), Some(Box::new(rejection)))
            }
            AppError::Forwarded {
                status,
                error_code,
                message,
                source,
            } => forwarded(status, error_code, message, source),
        }
    }
}

fn anticipated(status: StatusCode, message: String) -> Response {
    tracing::info!(status = status.as_u16(), "{}", message);
    let body = ErrorResponse::new(message, Some(status.as_u16()));
    (status, Json(body)).into_response()
}

fn forwarded(
    status: Option<u16>,
    error_code: Option<u16>,
    message: Option<String>,
    source: Option<BoxError>,
) -> Response {
    let status = resolve_status(status, error_code);
    let message = message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

    match &source {
        Some(source) => tracing::error!(
            status = status.as_u16(),
            error_code,
            error = %source,
            "{}",
            message
        ),
        None => tracing::error!(status = status.as_u16(), error_code, "{}", message),
    }

    let body = ErrorResponse::new(message, error_code);
    (status, Json(body)).into_response()
}

/// Status for a forwarded error: `status`, else `error_code`, else 500.
///
/// Codes that are not valid HTTP statuses also fall back to 500.
pub fn resolve_status(status: Option<u16>, error_code: Option<u16>) -> StatusCode {
    status
        .or(error_code)
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Response for a panic caught by `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    let body = ErrorResponse::new(DEFAULT_ERROR_MESSAGE, None);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
