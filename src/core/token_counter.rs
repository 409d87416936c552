//! Local token usage estimation.
//!
//! Gemini's own token counts are never consulted. Usage is always estimated
//! as `ceil(characters / 4)`, where characters are UTF-16 code units, so
//! astral-plane characters such as emoji count twice.

use crate::api::models::{EmbeddingUsage, Message, Usage};

/// Characters assumed per token.
pub const CHARS_PER_TOKEN: usize = 4;

/// Number of UTF-16 code units in `text`.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// `ceil(chars / 4)`, saturating at `u32::MAX`.
pub fn estimate_tokens(chars: usize) -> u32 {
    u32::try_from(chars.div_ceil(CHARS_PER_TOKEN)).unwrap_or(u32::MAX)
}

/// Build usage from raw character counts.
///
/// `total_tokens` is estimated from the combined character count, not by
/// adding the two estimates, so it may be one less than their sum.
pub fn usage_from_chars(prompt_chars: usize, completion_chars: usize) -> Usage {
    Usage {
        prompt_tokens: estimate_tokens(prompt_chars),
        completion_tokens: estimate_tokens(completion_chars),
        total_tokens: estimate_tokens(prompt_chars + completion_chars),
    }
}

/// Usage for a chat completion. Message contents are summed before dividing.
pub fn chat_usage(messages: &[Message], generated: &str) -> Usage {
    let prompt_chars = messages.iter().map(|m| char_count(&m.content)).sum();
    usage_from_chars(prompt_chars, char_count(generated))
}

/// Usage for a text completion.
pub fn completion_usage(prompt: &str, generated: &str) -> Usage {
    usage_from_chars(char_count(prompt), char_count(generated))
}

/// Usage for an embedding request: prompt and total are the same estimate.
pub fn embedding_usage(inputs: &[String]) -> EmbeddingUsage {
    let chars: usize = inputs.iter().map(|text| char_count(text)).sum();
    let tokens = estimate_tokens(chars);
    EmbeddingUsage {
        prompt_tokens: tokens,
        total_tokens: tokens,
    }
}
