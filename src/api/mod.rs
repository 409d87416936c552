//! API layer for the gateway.
//!
//! This module contains the HTTP handlers, request/response models,
//! OpenAPI documentation and router assembly.

pub mod docs;
pub mod handlers;
pub mod models;
pub mod router;

// Re-export commonly used types
pub use docs::ApiDoc;
pub use handlers::{
    chat_completions, completions, embeddings, health, list_models, metrics_handler, AppState,
};
pub use models::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, CompletionRequest,
    CompletionResponse, EmbeddingRequest, EmbeddingResponse, ModelList,
};
pub use router::build_router;
