//! Gemini OpenAI Gateway - an OpenAI-compatible HTTP front for Google Gemini
//!
//! Clients speak the OpenAI wire format; the gateway translates each request
//! into a single Gemini call and translates the answer back:
//!
//! - **Chat and text completions**: mapped onto Gemini `generateContent`
//! - **Embeddings**: `embedContent` for one input, `batchEmbedContents` for several
//! - **Usage estimation**: token counts estimated locally at four characters per token
//! - **Uniform errors**: every failure becomes `{"error": {"message", "type", "code"}}`
//! - **Metrics & Monitoring**: Prometheus metrics for observability
//!
//! # Architecture
//!
//! - [`core`]: config, errors, logging context, metrics, middleware, usage estimation
//! - [`transformer`]: pure OpenAI ⇄ Gemini translation
//! - [`services`]: the Gemini client and the per-request orchestrator
//! - [`api`]: HTTP handlers, models, OpenAPI docs and router
//!
//! # Configuration
//!
//! - `GEMINI_API_KEY`: Gemini API key. The server starts without it, but
//!   every completion and embedding request then fails with a 500.
//!
//! Optional environment variables:
//! - `GEMINI_API_BASE`, `GEMINI_MODEL`, `GEMINI_EMBEDDING_MODEL`
//! - `HOST`: Server bind address (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `STATIC_DIR`: Static asset root (default: public)
//! - `VERIFY_SSL`: Verify SSL certificates for Gemini (default: true)
//! - `REQUEST_TIMEOUT_SECS`: Request timeout in seconds (default: 300)

pub mod api;
pub mod core;
pub mod services;
pub mod transformer;

// Re-export commonly used types for convenience
pub use api::{build_router, ApiDoc, AppState};
pub use crate::core::{AppConfig, AppError, GeminiSettings, Result};
pub use services::{GatewayService, GeminiBackend, HttpGeminiBackend};
