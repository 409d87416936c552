//! Protocol translation between the OpenAI API and Google Gemini.
//!
//! ```text
//! Client (OpenAI format)
//!     ↓
//! [chat_to_generate_request / completion_to_generate_request / embedding_to_backend_call]
//!     ↓
//! Gemini request → GeminiBackend → Gemini response
//!     ↓
//! [extract_generated_text / embeddings_to_openai + to_* builders]
//!     ↓
//! Client (OpenAI format)
//! ```
//!
//! Everything in this module is pure: no I/O, no clocks, no shared state.

pub mod gemini;
pub mod gemini_types;

pub use gemini::{
    chat_to_generate_request, completion_to_generate_request, embedding_to_backend_call,
    embeddings_to_openai, extract_generated_text, gemini_role, generation_config,
    NO_RESPONSE_PLACEHOLDER,
};
pub use gemini_types::{
    BackendEndpoint, BatchEmbedContentsRequest, BatchEmbedContentsResponse, Content,
    ContentEmbedding, EmbedContentRequest, EmbedContentResponse, EmbeddingCall,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
