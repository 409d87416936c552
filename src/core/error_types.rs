//! Shared constants for the error envelope and request lifecycle labels.

use std::fmt;

pub const ERROR_TYPE_GEMINI: &str = "gemini_error";
pub const ERROR_TYPE_INTERNAL: &str = "internal_error";
pub const ERROR_TYPE_INVALID_REQUEST: &str = "invalid_request_error";

pub const GEMINI_ERROR_PREFIX: &str = "Gemini API error: ";

pub const MESSAGE_MISSING_API_KEY: &str = "Gemini API key not configured";
pub const MESSAGE_UNKNOWN_BACKEND_ERROR: &str = "Unknown error occurred";
pub const MESSAGE_UNEXPECTED_ERROR: &str = "An unexpected error occurred";

pub const PHASE_RECEIVED: &str = "received";
pub const PHASE_TRANSLATED: &str = "translated";
pub const PHASE_DISPATCHED: &str = "dispatched";
pub const PHASE_COMPLETED: &str = "completed";
pub const PHASE_FAILED: &str = "failed";

/// Lifecycle of a single gateway request.
///
/// `Received -> Translated -> Dispatched -> Completed | Failed`. Any error in
/// translation or dispatch jumps straight to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Received,
    Translated,
    Dispatched,
    Completed,
    Failed,
}

impl RequestPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => PHASE_RECEIVED,
            Self::Translated => PHASE_TRANSLATED,
            Self::Dispatched => PHASE_DISPATCHED,
            Self::Completed => PHASE_COMPLETED,
            Self::Failed => PHASE_FAILED,
        }
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
