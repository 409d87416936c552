//! Benchmarks for the transformer module.
//!
//! Run with: cargo bench --bench transformer_bench
//!
//! These benchmarks measure the OpenAI ⇄ Gemini translation functions and
//! local usage estimation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gemini_openai_gateway::{
    api::models::{ChatCompletionRequest, CompletionRequest, Message, Role},
    core::token_counter::{chat_usage, embedding_usage},
    transformer::{
        chat_to_generate_request, completion_to_generate_request, embedding_to_backend_call,
        embeddings_to_openai, extract_generated_text,
        gemini_types::{ContentEmbedding, GenerateContentResponse},
    },
};
use serde_json::json;

fn chat_request(message_count: usize) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: "gemini-pro".to_string(),
        messages: (0..message_count)
            .map(|i| {
                if i % 2 == 0 {
                    Message::new(Role::User, format!("Message {}", i))
                } else {
                    Message::new(Role::Assistant, format!("Response {}", i))
                }
            })
            .collect(),
        temperature: Some(0.7),
        max_tokens: Some(1000),
    }
}

// ============================================================================
// Request Translation Benchmarks
// ============================================================================

fn bench_chat_request(c: &mut Criterion) {
    let request = chat_request(2);

    c.bench_function("chat_to_generate_request", |b| {
        b.iter(|| chat_to_generate_request(black_box(&request)))
    });
}

fn bench_completion_request(c: &mut Criterion) {
    let request = CompletionRequest {
        model: "gemini-pro".to_string(),
        prompt: "Once upon a time".to_string(),
        temperature: None,
        max_tokens: Some(64),
    };

    c.bench_function("completion_to_generate_request", |b| {
        b.iter(|| completion_to_generate_request(black_box(&request)))
    });
}

fn bench_embedding_call(c: &mut Criterion) {
    let single = vec!["hello world".to_string()];
    let batch: Vec<String> = (0..16).map(|i| format!("document {}", i)).collect();

    c.bench_function("embedding_call_single", |b| {
        b.iter(|| embedding_to_backend_call(black_box(&single), "text-embedding-004"))
    });
    c.bench_function("embedding_call_batch_16", |b| {
        b.iter(|| embedding_to_backend_call(black_box(&batch), "text-embedding-004"))
    });
}

// ============================================================================
// Response Translation Benchmarks
// ============================================================================

fn bench_extract_text(c: &mut Criterion) {
    let nested: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "Hello! How can I help you today?"}]},
            "finishReason": "STOP"
        }]
    }))
    .unwrap();
    let flat: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"text": "Hello! How can I help you today?"}]
    }))
    .unwrap();

    c.bench_function("extract_generated_text_nested", |b| {
        b.iter(|| extract_generated_text(black_box(&nested)))
    });
    c.bench_function("extract_generated_text_flat", |b| {
        b.iter(|| extract_generated_text(black_box(&flat)))
    });
}

fn bench_embeddings_to_openai(c: &mut Criterion) {
    let embeddings: Vec<ContentEmbedding> = (0..16)
        .map(|i| ContentEmbedding {
            values: vec![i as f64 / 16.0; 768],
        })
        .collect();

    c.bench_function("embeddings_to_openai_16x768", |b| {
        b.iter(|| embeddings_to_openai(black_box(embeddings.clone())))
    });
}

// ============================================================================
// Scaling Benchmarks
// ============================================================================

fn bench_chat_request_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_request_scaling");

    for message_count in [1, 5, 10, 20, 50].iter() {
        let request = chat_request(*message_count);

        group.throughput(Throughput::Elements(*message_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(message_count),
            &request,
            |b, req| {
                b.iter(|| {
                    let mapped = chat_to_generate_request(black_box(req));
                    let usage = chat_usage(&req.messages, "generated reply");
                    (mapped, usage)
                })
            },
        );
    }

    group.finish();
}

fn bench_embedding_usage(c: &mut Criterion) {
    let inputs: Vec<String> = (0..100)
        .map(|i| format!("Sample document number {} with some unicode: héllo wörld", i))
        .collect();

    c.bench_function("embedding_usage_100", |b| {
        b.iter(|| embedding_usage(black_box(&inputs)))
    });
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(
    request_benches,
    bench_chat_request,
    bench_completion_request,
    bench_embedding_call,
);

criterion_group!(
    response_benches,
    bench_extract_text,
    bench_embeddings_to_openai,
);

criterion_group!(
    scaling_benches,
    bench_chat_request_scaling,
    bench_embedding_usage,
);

criterion_main!(request_benches, response_benches, scaling_benches);
