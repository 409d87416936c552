//! Error types and the uniform error envelope.
//!
//! Every failure in the gateway ends up as an [`AppError`]. The error
//! normalizer is [`AppError::to_envelope`], a pure total function producing
//! the `{"error": {"message", "type", "code"}}` body returned to clients.

use crate::api::models::{ApiErrorDetail, ApiErrorResponse};
use crate::core::error_types::{
    ERROR_TYPE_GEMINI, ERROR_TYPE_INTERNAL, ERROR_TYPE_INVALID_REQUEST, GEMINI_ERROR_PREFIX,
    MESSAGE_MISSING_API_KEY, MESSAGE_UNEXPECTED_ERROR, MESSAGE_UNKNOWN_BACKEND_ERROR,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// The Gemini API key is missing from configuration. Raised before any
    /// network call is attempted.
    #[error("{}", MESSAGE_MISSING_API_KEY)]
    Configuration,

    /// The backend was called and failed: an HTTP error status, a transport
    /// failure, or a payload that could not be decoded.
    #[error("{}{}", GEMINI_ERROR_PREFIX, best_backend_message(.message, .transport_message))]
    Backend {
        /// HTTP status reported by the backend, if a response was received
        status: Option<u16>,
        /// Message from the backend's structured error body
        message: Option<String>,
        /// Message describing the transport-level failure
        transport_message: Option<String>,
    },

    /// Any other unexpected failure.
    #[error("{}", internal_message(.0))]
    Internal(String),

    /// Client payload rejected at the HTTP edge, before the gateway core runs.
    #[error("{0}")]
    InvalidRequest(String),
}

fn best_backend_message<'a>(
    message: &'a Option<String>,
    transport_message: &'a Option<String>,
) -> &'a str {
    message
        .as_deref()
        .filter(|m| !m.is_empty())
        .or_else(|| transport_message.as_deref().filter(|m| !m.is_empty()))
        .unwrap_or(MESSAGE_UNKNOWN_BACKEND_ERROR)
}

fn internal_message(message: &str) -> &str {
    if message.is_empty() {
        MESSAGE_UNEXPECTED_ERROR
    } else {
        message
    }
}

impl AppError {
    /// Backend answered with a failure status.
    pub fn backend_status(status: u16, message: Option<String>, transport_message: String) -> Self {
        AppError::Backend {
            status: Some(status),
            message,
            transport_message: Some(transport_message),
        }
    }

    /// Backend could not be reached or its response could not be read.
    pub fn backend_transport(transport_message: impl Into<String>) -> Self {
        AppError::Backend {
            status: None,
            message: None,
            transport_message: Some(transport_message.into()),
        }
    }

    /// Envelope `code` field: the backend status when one was reported,
    /// otherwise the HTTP status of the error class.
    pub fn code(&self) -> u16 {
        match self {
            AppError::Configuration | AppError::Internal(_) => 500,
            AppError::Backend { status, .. } => status.unwrap_or(500),
            AppError::InvalidRequest(_) => 400,
        }
    }

    /// HTTP status of the response carrying the envelope.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Envelope `type` field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Backend { .. } => ERROR_TYPE_GEMINI,
            AppError::Configuration | AppError::Internal(_) => ERROR_TYPE_INTERNAL,
            AppError::InvalidRequest(_) => ERROR_TYPE_INVALID_REQUEST,
        }
    }

    /// Normalize this failure into the uniform error envelope.
    pub fn to_envelope(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.to_string(),
                error_type: self.error_type().to_string(),
                code: self.code(),
            },
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter
        let status = e.status().map(|s| s.as_u16());
        let transport_message = e.without_url().to_string();
        AppError::Backend {
            status,
            message: None,
            transport_message: Some(transport_message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error_type = self.error_type(), "{}", self);
        } else {
            tracing::warn!(status = %status, error_type = self.error_type(), "{}", self);
        }

        (status, Json(self.to_envelope())).into_response()
    }
}

/// Convenience type alias for Results using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
