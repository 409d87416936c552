//! HTTP middleware for request tracking and metrics.

use crate::core::logging::{generate_request_id, REQUEST_ID};
use crate::core::metrics::get_metrics;
use axum::{
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Header carrying the request ID back to the client.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assign a request ID, expose it to logs for the lifetime of the request and
/// echo it in the `x-request-id` response header.
///
/// A well-formed incoming `x-request-id` is reused.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(|v| v.to_string())
        .unwrap_or_else(generate_request_id);

    let mut response = REQUEST_ID
        .scope(request_id.clone(), async move { next.run(request).await })
        .await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Middleware for tracking request metrics.
pub struct MetricsMiddleware;

impl MetricsMiddleware {
    /// Track metrics for incoming requests.
    ///
    /// Increments the active request gauge, measures duration, records the
    /// request count by status code and logs one line per request. The
    /// endpoint label is the matched route, so static asset paths collapse
    /// into `unmatched`.
    pub async fn track_metrics(request: Request, next: Next) -> Response {
        let path = request.uri().path().to_string();
        let endpoint = request
            .extensions()
            .get::<MatchedPath>()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| "unmatched".to_string());
        let method = request.method().to_string();

        // Skip metrics endpoint itself to avoid recursion
        if path == "/metrics" {
            return next.run(request).await;
        }

        let metrics = get_metrics();
        metrics
            .active_requests
            .with_label_values(&[&endpoint])
            .inc();

        let start = Instant::now();
        let response = next.run(request).await;
        let duration = start.elapsed().as_secs_f64();
        let status_code = response.status().as_u16().to_string();

        metrics
            .request_count
            .with_label_values(&[&method, &endpoint, &status_code])
            .inc();
        metrics
            .request_duration
            .with_label_values(&[&method, &endpoint])
            .observe(duration);

        tracing::info!(
            "{} {} - status={} duration={:.3}s",
            method,
            path,
            status_code,
            duration
        );

        metrics
            .active_requests
            .with_label_values(&[&endpoint])
            .dec();

        response
    }
}
