//! OpenAPI documentation for the gateway's HTTP surface.

use utoipa::OpenApi;

/// OpenAPI documentation for the OpenAI-compatible endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::chat_completions,
        crate::api::handlers::completions,
        crate::api::handlers::embeddings,
        crate::api::handlers::list_models,
        crate::api::handlers::health,
    ),
    components(
        schemas(
            crate::api::models::Role,
            crate::api::models::Message,
            crate::api::models::ChatCompletionRequest,
            crate::api::models::ChatCompletionResponse,
            crate::api::models::Choice,
            crate::api::models::CompletionRequest,
            crate::api::models::CompletionResponse,
            crate::api::models::CompletionChoice,
            crate::api::models::Usage,
            crate::api::models::EmbeddingInput,
            crate::api::models::EmbeddingRequest,
            crate::api::models::EmbeddingResponse,
            crate::api::models::EmbeddingData,
            crate::api::models::EmbeddingUsage,
            crate::api::models::ModelList,
            crate::api::models::ModelInfo,
            crate::api::models::HealthResponse,
            crate::api::models::ApiErrorResponse,
            crate::api::models::ApiErrorDetail,
        )
    ),
    tags(
        (name = "completions", description = "Chat and text completions backed by Gemini"),
        (name = "embeddings", description = "Text embeddings backed by Gemini"),
        (name = "models", description = "Advertised model listing"),
        (name = "health", description = "Liveness")
    ),
    info(
        title = "Gemini OpenAI Gateway API",
        version = "1.0.0",
        description = "OpenAI-compatible API in front of Google Gemini.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    )
)]
pub struct ApiDoc;
