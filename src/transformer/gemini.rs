//! OpenAI ⇄ Gemini translation.
//!
//! Pure mapping functions with no I/O. Requests go OpenAI → Gemini, responses
//! go Gemini → OpenAI. Identifiers and timestamps are passed in by the caller
//! so every function here is deterministic.

use super::gemini_types::{
    BatchEmbedContentsRequest, BatchEmbedEntry, Content, ContentEmbedding, EmbedContentRequest,
    EmbeddingCall, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::api::models::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, CompletionChoice, CompletionRequest,
    CompletionResponse, EmbeddingData, EmbeddingResponse, EmbeddingUsage, Message, ModelInfo,
    ModelList, Role, Usage,
};
use crate::core::{AppError, Result};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
pub const TOP_P: f64 = 0.8;
pub const TOP_K: u32 = 40;

/// Returned as the generated text when Gemini produced none.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

pub const FINISH_REASON_STOP: &str = "stop";

/// Models advertised by `GET /v1/models`.
pub const ADVERTISED_MODELS: &[&str] = &["gemini-pro", "gemini-pro-vision"];
pub const MODEL_OWNER: &str = "google";

// ============================================================================
// Request mapping
// ============================================================================

/// Gemini role label for an OpenAI role. Only `assistant` is rewritten;
/// `system` passes through as-is.
pub fn gemini_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        other => other.as_str(),
    }
}

/// Generation config with client overrides applied over the fixed defaults.
pub fn generation_config(temperature: Option<f64>, max_tokens: Option<u32>) -> GenerationConfig {
    GenerationConfig {
        temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
        max_output_tokens: max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
        top_p: TOP_P,
        top_k: TOP_K,
    }
}

fn message_to_content(message: &Message) -> Content {
    Content::with_role(gemini_role(message.role), message.content.clone())
}

/// One Gemini content entry per chat message, order preserved.
pub fn chat_to_generate_request(request: &ChatCompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: request.messages.iter().map(message_to_content).collect(),
        generation_config: generation_config(request.temperature, request.max_tokens),
    }
}

/// The prompt becomes a single role-less content entry.
pub fn completion_to_generate_request(request: &CompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(request.prompt.clone())],
        generation_config: generation_config(request.temperature, request.max_tokens),
    }
}

/// Choose the embedding endpoint for `inputs` and build its body.
///
/// Exactly one input targets `embedContent`; two or more target
/// `batchEmbedContents`, each entry naming `models/{embedding_model}`.
pub fn embedding_to_backend_call(inputs: &[String], embedding_model: &str) -> Result<EmbeddingCall> {
    match inputs {
        [] => Err(AppError::InvalidRequest(
            "input must contain at least one string".to_string(),
        )),
        [single] => Ok(EmbeddingCall::Single(EmbedContentRequest {
            content: Content::text(single.clone()),
        })),
        many => {
            let model = format!("models/{}", embedding_model);
            Ok(EmbeddingCall::Batch(BatchEmbedContentsRequest {
                requests: many
                    .iter()
                    .map(|text| BatchEmbedEntry {
                        model: model.clone(),
                        content: Content::text(text.clone()),
                    })
                    .collect(),
            }))
        }
    }
}

// ============================================================================
// Response mapping
// ============================================================================

/// Pull the generated text out of a Gemini response.
///
/// Tried in order: first candidate's first content part, then the first
/// candidate's own `text`, then [`NO_RESPONSE_PLACEHOLDER`]. Empty strings
/// count as missing.
pub fn extract_generated_text(response: &GenerateContentResponse) -> String {
    let first = response.candidates.as_ref().and_then(|c| c.first());

    first
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.as_ref())
        .and_then(|parts| parts.first())
        .and_then(|part| part.text.as_deref())
        .filter(|text| !text.is_empty())
        .or_else(|| {
            first
                .and_then(|candidate| candidate.text.as_deref())
                .filter(|text| !text.is_empty())
        })
        .unwrap_or(NO_RESPONSE_PLACEHOLDER)
        .to_string()
}

/// Tag each embedding with its 0-based position.
pub fn embeddings_to_openai(embeddings: Vec<ContentEmbedding>) -> Vec<EmbeddingData> {
    embeddings
        .into_iter()
        .enumerate()
        .map(|(index, embedding)| EmbeddingData {
            object: "embedding".to_string(),
            embedding: embedding.values,
            index: index as u32,
        })
        .collect()
}

pub fn to_chat_completion(
    model: &str,
    generated: String,
    usage: Usage,
    timestamp_ms: i64,
) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: format!("chatcmpl-{}", timestamp_ms),
        object: "chat.completion".to_string(),
        created: timestamp_ms,
        model: model.to_string(),
        system_fingerprint: format!("fp_{}", timestamp_ms),
        choices: vec![Choice {
            index: 0,
            message: Message::new(Role::Assistant, generated),
            finish_reason: FINISH_REASON_STOP.to_string(),
        }],
        usage,
    }
}

pub fn to_text_completion(
    model: &str,
    generated: String,
    usage: Usage,
    timestamp_ms: i64,
) -> CompletionResponse {
    CompletionResponse {
        id: format!("cmpl-{}", timestamp_ms),
        object: "text_completion".to_string(),
        created: timestamp_ms,
        model: model.to_string(),
        choices: vec![CompletionChoice {
            text: generated,
            index: 0,
            logprobs: None,
            finish_reason: FINISH_REASON_STOP.to_string(),
        }],
        usage,
    }
}

pub fn to_embedding_response(
    embedding_model: &str,
    data: Vec<EmbeddingData>,
    usage: EmbeddingUsage,
) -> EmbeddingResponse {
    EmbeddingResponse {
        object: "list".to_string(),
        data,
        model: embedding_model.to_string(),
        usage,
    }
}

pub fn model_list(timestamp_ms: i64) -> ModelList {
    ModelList {
        object: "list".to_string(),
        data: ADVERTISED_MODELS
            .iter()
            .map(|id| ModelInfo {
                id: id.to_string(),
                object: "model".to_string(),
                created: timestamp_ms,
                owned_by: MODEL_OWNER.to_string(),
            })
            .collect(),
    }
}
