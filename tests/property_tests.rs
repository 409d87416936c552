//! Property-based tests for translation, usage estimation and errors.
//!
//! These tests use proptest to verify properties that should hold
//! for all inputs.

use gemini_openai_gateway::{
    api::models::{ChatCompletionRequest, Message, Role},
    core::{
        token_counter::{chat_usage, completion_usage, embedding_usage, estimate_tokens},
        AppError,
    },
    transformer::{
        chat_to_generate_request, embedding_to_backend_call, embeddings_to_openai,
        gemini_types::{BackendEndpoint, ContentEmbedding},
        EmbeddingCall,
    },
};
use proptest::prelude::*;

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::System), Just(Role::User), Just(Role::Assistant)]
}

fn message_strategy() -> impl Strategy<Value = Message> {
    (role_strategy(), "\\PC{1,40}").prop_map(|(role, content)| Message::new(role, content))
}

fn chat_request_strategy() -> impl Strategy<Value = ChatCompletionRequest> {
    (
        prop::collection::vec(message_strategy(), 1..=20),
        prop::option::of(0.0f64..2.0),
        prop::option::of(1u32..4096),
    )
        .prop_map(|(messages, temperature, max_tokens)| ChatCompletionRequest {
            model: "gemini-pro".to_string(),
            messages,
            temperature,
            max_tokens,
        })
}

proptest! {
    /// Property: one content entry per message, in order, with only
    /// `assistant` rewritten to `model`
    #[test]
    fn prop_chat_mapping_preserves_messages(request in chat_request_strategy()) {
        let mapped = chat_to_generate_request(&request);

        prop_assert_eq!(mapped.contents.len(), request.messages.len());
        for (message, content) in request.messages.iter().zip(&mapped.contents) {
            let expected_role = match message.role {
                Role::Assistant => "model",
                other => other.as_str(),
            };
            prop_assert_eq!(content.role.as_deref(), Some(expected_role));
            prop_assert_eq!(content.parts.len(), 1);
            prop_assert_eq!(&content.parts[0].text, &message.content);
        }
    }

    /// Property: client overrides win, fixed sampling constants never change
    #[test]
    fn prop_generation_config_overrides(request in chat_request_strategy()) {
        let config = chat_to_generate_request(&request).generation_config;

        prop_assert_eq!(config.temperature, request.temperature.unwrap_or(0.7));
        prop_assert_eq!(config.max_output_tokens, request.max_tokens.unwrap_or(1024));
        prop_assert_eq!(config.top_p, 0.8);
        prop_assert_eq!(config.top_k, 40);
    }

    /// Property: estimate is the ceiling of chars / 4
    #[test]
    fn prop_estimate_is_ceiling(chars in 0usize..1_000_000) {
        let tokens = estimate_tokens(chars) as usize;
        prop_assert!(tokens * 4 >= chars);
        prop_assert!(tokens * 4 < chars + 4);
    }

    /// Property: total is estimated from combined length and never exceeds
    /// the sum of the parts
    #[test]
    fn prop_completion_usage_total(prompt in "\\PC{0,200}", generated in "\\PC{0,200}") {
        let usage = completion_usage(&prompt, &generated);
        let combined = prompt.encode_utf16().count() + generated.encode_utf16().count();

        prop_assert_eq!(usage.total_tokens, estimate_tokens(combined));
        prop_assert!(usage.total_tokens <= usage.prompt_tokens + usage.completion_tokens);
        prop_assert!(usage.total_tokens + 1 >= usage.prompt_tokens + usage.completion_tokens);
    }

    /// Property: chat prompt tokens come from the summed message lengths
    #[test]
    fn prop_chat_usage_sums_messages(request in chat_request_strategy(), generated in "\\PC{0,100}") {
        let usage = chat_usage(&request.messages, &generated);
        let prompt_chars: usize = request.messages.iter().map(|m| m.content.encode_utf16().count()).sum();
        prop_assert_eq!(usage.prompt_tokens, estimate_tokens(prompt_chars));
    }

    /// Property: exactly one input uses the single endpoint, more use the batch
    /// endpoint with one entry per input
    #[test]
    fn prop_embedding_endpoint_selection(inputs in prop::collection::vec("[a-z ]{1,30}", 1..=10)) {
        let call = embedding_to_backend_call(&inputs, "text-embedding-004").unwrap();

        prop_assert_eq!(call.input_count(), inputs.len());
        if inputs.len() == 1 {
            prop_assert_eq!(call.endpoint(), BackendEndpoint::EmbedContent);
        } else {
            prop_assert_eq!(call.endpoint(), BackendEndpoint::BatchEmbedContents);
            let EmbeddingCall::Batch(batch) = call else {
                unreachable!();
            };
            for (entry, input) in batch.requests.iter().zip(&inputs) {
                prop_assert_eq!(&entry.content.parts[0].text, input);
            }
        }
    }

    /// Property: embedding prompt and total tokens are always equal
    #[test]
    fn prop_embedding_usage_equal(inputs in prop::collection::vec("\\PC{0,50}", 1..=10)) {
        let usage = embedding_usage(&inputs);
        prop_assert_eq!(usage.prompt_tokens, usage.total_tokens);
    }

    /// Property: embeddings keep their order and get 0-based indices
    #[test]
    fn prop_embeddings_indexed(values in prop::collection::vec(prop::collection::vec(-1.0f64..1.0, 0..8), 0..20)) {
        let embeddings = values
            .iter()
            .map(|v| ContentEmbedding { values: v.clone() })
            .collect();
        let data = embeddings_to_openai(embeddings);

        prop_assert_eq!(data.len(), values.len());
        for (i, (entry, original)) in data.iter().zip(&values).enumerate() {
            prop_assert_eq!(entry.index as usize, i);
            prop_assert_eq!(&entry.embedding, original);
        }
    }

    /// Property: backend errors surface the backend status as both the
    /// HTTP status and the envelope code
    #[test]
    fn prop_backend_status_preserved(status in 400u16..600, message in prop::option::of("[a-zA-Z ]{1,40}")) {
        let err = AppError::backend_status(status, message.clone(), format!("Request failed with status code {}", status));
        let envelope = err.to_envelope();

        prop_assert_eq!(envelope.error.code, status);
        prop_assert_eq!(err.status_code().as_u16(), status);
        prop_assert_eq!(envelope.error.error_type.as_str(), "gemini_error");
        prop_assert!(envelope.error.message.starts_with("Gemini API error: "));
        if let Some(message) = message {
            prop_assert!(envelope.error.message.ends_with(&message));
        }
    }
}
