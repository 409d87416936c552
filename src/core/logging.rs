//! Logging utilities with request context support.
//!
//! The request-id middleware stores a per-request identifier in task-local
//! storage so that service-level logs can include it without threading it
//! through every call.

tokio::task_local! {
    /// Task-local storage for the current request ID.
    pub static REQUEST_ID: String;
}

/// Get the current request ID from context, if set.
///
/// Returns an empty string if no request ID is set.
pub fn get_request_id() -> String {
    REQUEST_ID.try_with(|id| id.clone()).unwrap_or_default()
}

/// Generate a new unique request ID using UUID v4.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Used for response identifiers and `created` fields. Not unique across
/// concurrent requests in the same millisecond.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
