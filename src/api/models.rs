//! API request and response models.
//!
//! This module defines the OpenAI-shaped data structures accepted and
//! returned by the gateway: chat completions, text completions, embeddings,
//! model listings and the error envelope.

use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Conversation role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"role": "user", "content": "Hello!"}))]
pub struct Message {
    /// Role: "system", "user", or "assistant"
    pub role: Role,

    /// Message content
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Chat completion request following OpenAI API format.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "model": "gemini-pro",
    "messages": [
        {"role": "system", "content": "You are a helpful assistant."},
        {"role": "user", "content": "Hello!"}
    ],
    "temperature": 0.7,
    "max_tokens": 1000
}))]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("model", &self.model)?;
        if self.messages.is_empty() {
            return Err(AppError::InvalidRequest(
                "messages must contain at least one message".to_string(),
            ));
        }
        for (i, message) in self.messages.iter().enumerate() {
            require_non_empty(&format!("messages[{}].content", i), &message.content)?;
        }
        require_positive_max_tokens(self.max_tokens)
    }
}

/// Text completion request following OpenAI API format.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "model": "gemini-pro",
    "prompt": "Once upon a time",
    "max_tokens": 64
}))]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("model", &self.model)?;
        require_non_empty("prompt", &self.prompt)?;
        require_positive_max_tokens(self.max_tokens)
    }
}

/// Embedding input: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Multiple(Vec<String>),
}

impl EmbeddingInput {
    /// Normalize to an ordered list of texts.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            EmbeddingInput::Single(text) => vec![text],
            EmbeddingInput::Multiple(texts) => texts,
        }
    }
}

/// Embedding request following OpenAI API format.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "model": "text-embedding-004",
    "input": ["first document", "second document"]
}))]
pub struct EmbeddingRequest {
    /// Model identifier
    pub model: String,

    /// Text or texts to embed
    pub input: EmbeddingInput,
}

impl EmbeddingRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("model", &self.model)?;
        match &self.input {
            EmbeddingInput::Single(text) => require_non_empty("input", text),
            EmbeddingInput::Multiple(texts) => {
                if texts.is_empty() {
                    return Err(AppError::InvalidRequest(
                        "input must contain at least one string".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::InvalidRequest(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

fn require_positive_max_tokens(max_tokens: Option<u32>) -> Result<()> {
    if max_tokens == Some(0) {
        return Err(AppError::InvalidRequest(
            "max_tokens must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "chatcmpl-1700000000000",
    "object": "chat.completion",
    "created": 1700000000000i64,
    "model": "gemini-pro",
    "system_fingerprint": "fp_1700000000000",
    "choices": [{
        "index": 0,
        "message": {"role": "assistant", "content": "Hello! How can I help you today?"},
        "finish_reason": "stop"
    }],
    "usage": {"prompt_tokens": 3, "completion_tokens": 9, "total_tokens": 11}
}))]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub system_fingerprint: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

/// A single choice in a chat completion response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Choice {
    pub index: u32,
    pub message: Message,
    pub finish_reason: String,
}

/// Text completion response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    pub usage: Usage,
}

/// A single choice in a text completion response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    #[schema(value_type = Option<Object>)]
    pub logprobs: Option<serde_json::Value>,
    pub finish_reason: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}))]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Embedding list response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<EmbeddingData>,
    pub model: String,
    pub usage: EmbeddingUsage,
}

/// A single embedding vector tagged with the position of its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmbeddingData {
    pub object: String,
    pub embedding: Vec<f64>,
    pub index: u32,
}

/// Token usage for embedding requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmbeddingUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

/// Model information.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": "gemini-pro", "object": "model", "created": 1700000000000i64, "owned_by": "google"}))]
pub struct ModelInfo {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub owned_by: String,
}

/// List of available models.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelList {
    pub object: String,
    pub data: Vec<ModelInfo>,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"status": "ok"}))]
pub struct HealthResponse {
    pub status: String,
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": {
        "message": "Gemini API error: Resource has been exhausted",
        "type": "gemini_error",
        "code": 429
    }
}))]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail in API error responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"role":"assistant","content":"Hi there!"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "Hi there!");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let json = r#"{"role":"tool","content":"x"}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Message::new(Role::System, "be brief")).unwrap();
        assert!(json.contains("\"role\":\"system\""));
    }

    #[test]
    fn test_chat_request_optional_fields() {
        let json = r#"{"model":"gemini-pro","messages":[{"role":"user","content":"hi"}]}"#;
        let request: ChatCompletionRequest = serde_json::from_str(json).unwrap();
        assert!(request.temperature.is_none());
        assert!(request.max_tokens.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_chat_request_validation_empty_messages() {
        let request = ChatCompletionRequest {
            model: "gemini-pro".to_string(),
            messages: vec![],
            temperature: None,
            max_tokens: None,
        };
        assert_matches!(request.validate(), Err(AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_chat_request_validation_empty_content() {
        let request = ChatCompletionRequest {
            model: "gemini-pro".to_string(),
            messages: vec![Message::new(Role::User, "")],
            temperature: None,
            max_tokens: None,
        };
        assert_matches!(
            request.validate(),
            Err(AppError::InvalidRequest(msg)) if msg.contains("messages[0].content")
        );
    }

    #[test]
    fn test_chat_request_validation_zero_max_tokens() {
        let request = ChatCompletionRequest {
            model: "gemini-pro".to_string(),
            messages: vec![Message::new(Role::User, "hi")],
            temperature: None,
            max_tokens: Some(0),
        };
        assert_matches!(request.validate(), Err(AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_completion_request_validation() {
        let request = CompletionRequest {
            model: "gemini-pro".to_string(),
            prompt: String::new(),
            temperature: None,
            max_tokens: None,
        };
        assert_matches!(
            request.validate(),
            Err(AppError::InvalidRequest(msg)) if msg == "prompt must not be empty"
        );
    }

    #[test]
    fn test_embedding_input_single() {
        let json = r#"{"model":"text-embedding-004","input":"hello"}"#;
        let request: EmbeddingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.input, EmbeddingInput::Single("hello".to_string()));
        assert_eq!(request.input.into_vec(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_embedding_input_multiple() {
        let json = r#"{"model":"text-embedding-004","input":["a","b"]}"#;
        let request: EmbeddingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.input.into_vec(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_embedding_request_validation() {
        let empty_list = EmbeddingRequest {
            model: "text-embedding-004".to_string(),
            input: EmbeddingInput::Multiple(vec![]),
        };
        assert_matches!(empty_list.validate(), Err(AppError::InvalidRequest(_)));

        let blank_item = EmbeddingRequest {
            model: "text-embedding-004".to_string(),
            input: EmbeddingInput::Multiple(vec!["a".to_string(), String::new()]),
        };
        assert!(blank_item.validate().is_ok());
    }

    #[test]
    fn test_completion_choice_logprobs_null() {
        let choice = CompletionChoice {
            text: "hi".to_string(),
            index: 0,
            logprobs: None,
            finish_reason: "stop".to_string(),
        };
        let json = serde_json::to_value(&choice).unwrap();
        assert!(json["logprobs"].is_null());
        assert!(json.as_object().unwrap().contains_key("logprobs"));
    }

    #[test]
    fn test_api_error_type_field_renamed() {
        let body = ApiErrorResponse {
            error: ApiErrorDetail {
                message: "m".to_string(),
                error_type: "internal_error".to_string(),
                code: 500,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"type\":\"internal_error\""));
    }
}
