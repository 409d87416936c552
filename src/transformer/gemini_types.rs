//! Gemini wire types.
//!
//! Request types serialize to the exact shape the Gemini REST API expects
//! (camelCase). Response types are lenient: every field the gateway does not
//! strictly need is optional, and unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three Gemini endpoints the gateway calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendEndpoint {
    GenerateContent,
    EmbedContent,
    BatchEmbedContents,
}

impl BackendEndpoint {
    /// Method suffix used in the Gemini URL (`models/{model}:{method}`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenerateContent => "generateContent",
            Self::EmbedContent => "embedContent",
            Self::BatchEmbedContents => "batchEmbedContents",
        }
    }
}

impl fmt::Display for BackendEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part text content with no role.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn with_role(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// Body returned by `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// One generation result. Some response variants omit `content.parts` and
/// carry the text on the candidate itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of an `embedContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedContentRequest {
    pub content: Content,
}

/// One entry of a `batchEmbedContents` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEmbedEntry {
    pub model: String,
    pub content: Content,
}

/// Body of a `batchEmbedContents` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEmbedContentsRequest {
    pub requests: Vec<BatchEmbedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEmbedding {
    pub values: Vec<f64>,
}

/// Body returned by `embedContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

/// Body returned by `batchEmbedContents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEmbedContentsResponse {
    pub embeddings: Vec<ContentEmbedding>,
}

/// Which embedding endpoint a request must go to, with its body.
///
/// The single-item endpoint accepts no list payload, so one input always
/// goes to `embedContent` and two or more to `batchEmbedContents`.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingCall {
    Single(EmbedContentRequest),
    Batch(BatchEmbedContentsRequest),
}

impl EmbeddingCall {
    pub fn endpoint(&self) -> BackendEndpoint {
        match self {
            EmbeddingCall::Single(_) => BackendEndpoint::EmbedContent,
            EmbeddingCall::Batch(_) => BackendEndpoint::BatchEmbedContents,
        }
    }

    pub fn input_count(&self) -> usize {
        match self {
            EmbeddingCall::Single(_) => 1,
            EmbeddingCall::Batch(batch) => batch.requests.len(),
        }
    }
}
