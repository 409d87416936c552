//! HTTP request handlers for the gateway API.
//!
//! Handlers are thin: decode and validate the body, hand it to
//! [`GatewayService`], and wrap the result with the route's success status.
//! Failures become the uniform error envelope through `AppError`'s
//! `IntoResponse`.

use crate::api::models::*;
use crate::core::{AppError, Result};
use crate::services::GatewayService;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use prometheus::{Encoder, TextEncoder};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: GatewayService,
}

impl AppState {
    pub fn new(gateway: GatewayService) -> Arc<Self> {
        Arc::new(Self { gateway })
    }
}

/// Turn a body-extraction failure into a 400 envelope.
fn decode_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))
}

/// List the advertised models.
#[utoipa::path(
    get,
    path = "/v1/models",
    tag = "models",
    responses(
        (status = 200, description = "Available models", body = ModelList)
    )
)]
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelList> {
    Json(state.gateway.list_models())
}

/// Create a chat completion.
#[utoipa::path(
    post,
    path = "/v1/chat/completions",
    tag = "completions",
    request_body = ChatCompletionRequest,
    responses(
        (status = 201, description = "Chat completion", body = ChatCompletionResponse),
        (status = 400, description = "Invalid request", body = ApiErrorResponse),
        (status = 500, description = "Configuration or backend error", body = ApiErrorResponse)
    )
)]
#[tracing::instrument(skip(state, payload))]
pub async fn chat_completions(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ChatCompletionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ChatCompletionResponse>)> {
    let request = decode_body(payload)?;
    request.validate()?;

    let response = state.gateway.create_chat_completion(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Create a text completion.
#[utoipa::path(
    post,
    path = "/v1/completions",
    tag = "completions",
    request_body = CompletionRequest,
    responses(
        (status = 201, description = "Text completion", body = CompletionResponse),
        (status = 400, description = "Invalid request", body = ApiErrorResponse),
        (status = 500, description = "Configuration or backend error", body = ApiErrorResponse)
    )
)]
#[tracing::instrument(skip(state, payload))]
pub async fn completions(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CompletionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompletionResponse>)> {
    let request = decode_body(payload)?;
    request.validate()?;

    let response = state.gateway.create_completion(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Create embeddings for one or more texts.
#[utoipa::path(
    post,
    path = "/v1/embeddings",
    tag = "embeddings",
    request_body = EmbeddingRequest,
    responses(
        (status = 201, description = "Embeddings", body = EmbeddingResponse),
        (status = 400, description = "Invalid request", body = ApiErrorResponse),
        (status = 500, description = "Configuration or backend error", body = ApiErrorResponse)
    )
)]
#[tracing::instrument(skip(state, payload))]
pub async fn embeddings(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<EmbeddingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmbeddingResponse>)> {
    let request = decode_body(payload)?;
    request.validate()?;

    let response = state.gateway.create_embedding(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Prometheus metrics in text exposition format.
pub async fn metrics_handler() -> Result<Response> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response())
}
