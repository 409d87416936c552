//! Gemini OpenAI Gateway - Main entry point
//!
//! This binary loads configuration from the environment, wires the Gemini
//! client into the gateway service and serves the HTTP API.

use anyhow::{Context, Result};
use chrono::Local;
use gemini_openai_gateway::{
    api::{build_router, AppState},
    core::{init_metrics, AppConfig},
    services::{build_http_client, GatewayService, HttpGeminiBackend},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

/// Custom time formatter that uses local timezone (respects TZ environment variable)
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn init_tracing() {
    // NO_COLOR disables ANSI codes, e.g. when logging to a file
    let no_color = std::env::var("NO_COLOR").is_ok();

    let base_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,gemini_openai_gateway=debug".to_string());

    // Always suppress noisy HTTP library logs regardless of RUST_LOG setting
    let filter_str = format!(
        "{},hyper=warn,hyper::proto=warn,h2=warn,reqwest=warn",
        base_filter
    );
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    if no_color {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTime)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_timer(LocalTime))
            .init();
    }
}

async fn async_main() -> Result<()> {
    init_tracing();
    init_metrics();

    let config = AppConfig::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; completion and embedding requests will fail"
        );
    }

    let http_client = build_http_client(&config).context("Failed to build HTTP client")?;
    let backend = Arc::new(HttpGeminiBackend::new(http_client, config.gemini.clone()));
    let gateway = GatewayService::new(backend, config.api_key.clone(), config.gemini.clone());
    let app = build_router(AppState::new(gateway), Some(config.static_dir.as_path()));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    tracing::info!("Starting Gemini OpenAI Gateway on {}", addr);
    tracing::info!(
        "Gemini model: {}, embedding model: {}",
        config.gemini.model,
        config.gemini.embedding_model
    );
    tracing::info!("OpenAI API: /v1/chat/completions, /v1/completions, /v1/embeddings, /v1/models");
    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Metrics endpoint: /metrics");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
