//! Core functionality for the gateway.
//!
//! This module contains fundamental components used throughout the application:
//! - Configuration management
//! - Error handling
//! - Logging context and metrics collection
//! - HTTP middleware
//! - Token usage estimation

pub mod config;
pub mod error;
pub mod error_types;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod token_counter;

// Re-export commonly used types
pub use config::{AppConfig, GeminiSettings, ServerConfig};
pub use error::{AppError, Result};
pub use logging::{get_request_id, REQUEST_ID};
pub use metrics::{get_metrics, init_metrics, Metrics};
pub use middleware::{request_id_middleware, MetricsMiddleware};
