//! Prometheus metrics for monitoring the gateway.
//!
//! A single registry of request, token and backend metrics, initialized once
//! at startup and shared through a `OnceLock`.

use prometheus::{
    register_gauge_vec, register_histogram_vec, register_int_counter_vec, GaugeVec, HistogramVec,
    IntCounterVec,
};
use std::sync::OnceLock;

/// Container for all application metrics.
pub struct Metrics {
    /// Total number of requests by method, endpoint and status
    pub request_count: IntCounterVec,

    /// Request duration histogram in seconds
    pub request_duration: HistogramVec,

    /// Number of currently active requests by endpoint
    pub active_requests: GaugeVec,

    /// Estimated token usage by model and token type
    pub token_usage: IntCounterVec,

    /// Gemini call latency by backend endpoint
    pub backend_latency: HistogramVec,

    /// Failed Gemini calls by backend endpoint and status ("transport" when no status)
    pub backend_errors: IntCounterVec,
}

static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Initialize the metrics registry.
///
/// Safe to call more than once; later calls return the same instance.
pub fn init_metrics() -> &'static Metrics {
    METRICS.get_or_init(|| {
        let request_count = register_int_counter_vec!(
            "gemini_gateway_requests_total",
            "Total number of requests",
            &["method", "endpoint", "status_code"]
        )
        .expect("Failed to register request_count metric");

        let request_duration = register_histogram_vec!(
            "gemini_gateway_request_duration_seconds",
            "Request duration in seconds",
            &["method", "endpoint"],
            vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]
        )
        .expect("Failed to register request_duration metric");

        let active_requests = register_gauge_vec!(
            "gemini_gateway_active_requests",
            "Number of active requests",
            &["endpoint"]
        )
        .expect("Failed to register active_requests metric");

        let token_usage = register_int_counter_vec!(
            "gemini_gateway_tokens_total",
            "Estimated number of tokens processed",
            &["model", "token_type"]
        )
        .expect("Failed to register token_usage metric");

        let backend_latency = register_histogram_vec!(
            "gemini_gateway_backend_latency_seconds",
            "Gemini API call latency in seconds",
            &["backend_endpoint"],
            vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]
        )
        .expect("Failed to register backend_latency metric");

        let backend_errors = register_int_counter_vec!(
            "gemini_gateway_backend_errors_total",
            "Failed Gemini API calls",
            &["backend_endpoint", "status"]
        )
        .expect("Failed to register backend_errors metric");

        Metrics {
            request_count,
            request_duration,
            active_requests,
            token_usage,
            backend_latency,
            backend_errors,
        }
    })
}

/// Get the global metrics instance, initializing it on first use.
pub fn get_metrics() -> &'static Metrics {
    init_metrics()
}

/// Record estimated token usage for a completed request.
pub fn record_token_usage(model: &str, prompt_tokens: u32, completion_tokens: u32, total_tokens: u32) {
    let metrics = get_metrics();
    for (token_type, count) in [
        ("prompt", prompt_tokens),
        ("completion", completion_tokens),
        ("total", total_tokens),
    ] {
        metrics
            .token_usage
            .with_label_values(&[model, token_type])
            .inc_by(count as u64);
    }
}
