//! Gateway orchestration.
//!
//! [`GatewayService`] drives one OpenAI-shaped request through
//! translate → backend call → translate back → usage estimate. It owns no
//! mutable state: the backend client and resolved credential are handed in
//! at construction and every request is independent.

use crate::api::models::{
    ChatCompletionRequest, ChatCompletionResponse, CompletionRequest, CompletionResponse,
    EmbeddingRequest, EmbeddingResponse, ModelList,
};
use crate::core::config::GeminiSettings;
use crate::core::error_types::RequestPhase;
use crate::core::logging::{get_request_id, now_millis};
use crate::core::metrics::record_token_usage;
use crate::core::token_counter::{chat_usage, completion_usage, embedding_usage};
use crate::core::{AppError, Result};
use crate::services::gemini_client::GeminiBackend;
use crate::transformer::gemini::{
    model_list, to_chat_completion, to_embedding_response, to_text_completion,
};
use crate::transformer::{
    chat_to_generate_request, completion_to_generate_request, embedding_to_backend_call,
    embeddings_to_openai, extract_generated_text, EmbeddingCall,
};
use std::sync::Arc;

const OP_CHAT: &str = "chat_completion";
const OP_COMPLETION: &str = "completion";
const OP_EMBEDDING: &str = "embedding";

fn log_phase(operation: &'static str, phase: RequestPhase) {
    tracing::debug!(
        request_id = %get_request_id(),
        operation = operation,
        phase = %phase,
        "Request phase"
    );
}

fn log_failure(operation: &'static str, error: &AppError) {
    tracing::error!(
        request_id = %get_request_id(),
        operation = operation,
        phase = %RequestPhase::Failed,
        code = error.code(),
        error = %error,
        "Gateway request failed"
    );
}

/// Stateless orchestrator for the four gateway operations.
#[derive(Clone)]
pub struct GatewayService {
    backend: Arc<dyn GeminiBackend>,
    api_key: Option<String>,
    settings: GeminiSettings,
}

impl GatewayService {
    /// Create a service over `backend`. `api_key` is `None` when no Gemini
    /// key is configured; generation and embedding requests then fail with
    /// [`AppError::Configuration`] without calling the backend.
    pub fn new(
        backend: Arc<dyn GeminiBackend>,
        api_key: Option<String>,
        settings: GeminiSettings,
    ) -> Self {
        Self {
            backend,
            api_key: api_key.filter(|key| !key.is_empty()),
            settings,
        }
    }

    fn require_api_key(&self, operation: &'static str) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) => Ok(key),
            None => {
                let error = AppError::Configuration;
                log_failure(operation, &error);
                Err(error)
            }
        }
    }

    /// The fixed list of advertised models. Never touches the backend.
    pub fn list_models(&self) -> ModelList {
        model_list(now_millis())
    }

    /// Generate a chat reply for `request`.
    pub async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        log_phase(OP_CHAT, RequestPhase::Received);
        let api_key = self.require_api_key(OP_CHAT)?;

        let backend_request = chat_to_generate_request(&request);
        log_phase(OP_CHAT, RequestPhase::Translated);

        log_phase(OP_CHAT, RequestPhase::Dispatched);
        let backend_response = self
            .backend
            .generate_content(api_key, &backend_request)
            .await
            .inspect_err(|e| log_failure(OP_CHAT, e))?;

        let generated = extract_generated_text(&backend_response);
        let usage = chat_usage(&request.messages, &generated);
        record_token_usage(
            &request.model,
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens,
        );

        log_phase(OP_CHAT, RequestPhase::Completed);
        tracing::info!(
            request_id = %get_request_id(),
            model = %request.model,
            messages = request.messages.len(),
            total_tokens = usage.total_tokens,
            "Chat completion served"
        );

        Ok(to_chat_completion(
            &request.model,
            generated,
            usage,
            now_millis(),
        ))
    }

    /// Continue `request.prompt` as a text completion.
    pub async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        log_phase(OP_COMPLETION, RequestPhase::Received);
        let api_key = self.require_api_key(OP_COMPLETION)?;

        let backend_request = completion_to_generate_request(&request);
        log_phase(OP_COMPLETION, RequestPhase::Translated);

        log_phase(OP_COMPLETION, RequestPhase::Dispatched);
        let backend_response = self
            .backend
            .generate_content(api_key, &backend_request)
            .await
            .inspect_err(|e| log_failure(OP_COMPLETION, e))?;

        let generated = extract_generated_text(&backend_response);
        let usage = completion_usage(&request.prompt, &generated);
        record_token_usage(
            &request.model,
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens,
        );

        log_phase(OP_COMPLETION, RequestPhase::Completed);
        tracing::info!(
            request_id = %get_request_id(),
            model = %request.model,
            total_tokens = usage.total_tokens,
            "Text completion served"
        );

        Ok(to_text_completion(
            &request.model,
            generated,
            usage,
            now_millis(),
        ))
    }

    /// Embed one or more texts. A single text goes to `embedContent`,
    /// several go to `batchEmbedContents` in one call.
    pub async fn create_embedding(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        log_phase(OP_EMBEDDING, RequestPhase::Received);
        let api_key = self.require_api_key(OP_EMBEDDING)?;

        let inputs = request.input.into_vec();
        let call = embedding_to_backend_call(&inputs, &self.settings.embedding_model)
            .inspect_err(|e| log_failure(OP_EMBEDDING, e))?;
        log_phase(OP_EMBEDDING, RequestPhase::Translated);

        log_phase(OP_EMBEDDING, RequestPhase::Dispatched);
        let embeddings = match &call {
            EmbeddingCall::Single(body) => self
                .backend
                .embed_content(api_key, body)
                .await
                .map(|response| vec![response.embedding]),
            EmbeddingCall::Batch(body) => self
                .backend
                .batch_embed_contents(api_key, body)
                .await
                .map(|response| response.embeddings),
        }
        .inspect_err(|e| log_failure(OP_EMBEDDING, e))?;

        let usage = embedding_usage(&inputs);
        record_token_usage(
            &self.settings.embedding_model,
            usage.prompt_tokens,
            0,
            usage.total_tokens,
        );

        log_phase(OP_EMBEDDING, RequestPhase::Completed);
        tracing::info!(
            request_id = %get_request_id(),
            endpoint = %call.endpoint(),
            inputs = call.input_count(),
            total_tokens = usage.total_tokens,
            "Embedding served"
        );

        Ok(to_embedding_response(
            &self.settings.embedding_model,
            embeddings_to_openai(embeddings),
            usage,
        ))
    }
}
