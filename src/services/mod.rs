//! Business logic services for the gateway.
//!
//! - [`gemini_client`]: the backend seam and its HTTP implementation
//! - [`gateway_service`]: per-request orchestration

pub mod gateway_service;
pub mod gemini_client;

// Re-export commonly used types
pub use gateway_service::GatewayService;
pub use gemini_client::{build_http_client, GeminiBackend, HttpGeminiBackend};
