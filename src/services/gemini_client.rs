//! HTTP client for the Google Gemini API.
//!
//! [`GeminiBackend`] is the seam between the gateway core and the network.
//! The production implementation, [`HttpGeminiBackend`], posts JSON to
//! `{api_base}/{model}:{endpoint}?key={api_key}`. Tests substitute their own
//! implementation to observe calls without touching the network.

use crate::core::config::{AppConfig, GeminiSettings};
use crate::core::metrics::get_metrics;
use crate::core::{AppError, Result};
use crate::transformer::gemini_types::{
    BackendEndpoint, BatchEmbedContentsRequest, BatchEmbedContentsResponse, EmbedContentRequest,
    EmbedContentResponse, GenerateContentRequest, GenerateContentResponse,
};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Calls to the Gemini API used by the gateway.
#[async_trait]
pub trait GeminiBackend: Send + Sync {
    /// `POST {model}:generateContent` with the configured generation model.
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    /// `POST {embedding_model}:embedContent` for a single text.
    async fn embed_content(
        &self,
        api_key: &str,
        request: &EmbedContentRequest,
    ) -> Result<EmbedContentResponse>;

    /// `POST {embedding_model}:batchEmbedContents` for two or more texts.
    async fn batch_embed_contents(
        &self,
        api_key: &str,
        request: &BatchEmbedContentsRequest,
    ) -> Result<BatchEmbedContentsResponse>;
}

/// Build the shared HTTP client with connection pooling.
pub fn build_http_client(config: &AppConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(!config.verify_ssl)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .pool_max_idle_per_host(100)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
}

/// [`GeminiBackend`] over HTTPS with `reqwest`.
#[derive(Clone)]
pub struct HttpGeminiBackend {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl HttpGeminiBackend {
    pub fn new(client: reqwest::Client, settings: GeminiSettings) -> Self {
        Self { client, settings }
    }

    /// Endpoint URL without the key query parameter. Safe to log.
    pub fn endpoint_url(&self, model: &str, endpoint: BackendEndpoint) -> String {
        format!(
            "{}/{}:{}",
            self.settings.api_base.trim_end_matches('/'),
            model,
            endpoint.as_str()
        )
    }

    async fn post<B, R>(
        &self,
        model: &str,
        endpoint: BackendEndpoint,
        api_key: &str,
        body: &B,
    ) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(model, endpoint);
        let metrics = get_metrics();
        let start = Instant::now();

        tracing::debug!(url = %url, endpoint = %endpoint, "Calling Gemini API");

        let result = self.send(&url, api_key, body).await;

        metrics
            .backend_latency
            .with_label_values(&[endpoint.as_str()])
            .observe(start.elapsed().as_secs_f64());

        if let Err(e) = &result {
            let status_label = match e {
                AppError::Backend {
                    status: Some(status),
                    ..
                } => status.to_string(),
                _ => "transport".to_string(),
            };
            metrics
                .backend_errors
                .with_label_values(&[endpoint.as_str(), &status_label])
                .inc();
            tracing::warn!(
                url = %url,
                endpoint = %endpoint,
                status = %status_label,
                error = %e,
                "Gemini API call failed"
            );
        }

        result
    }

    async fn send<B, R>(&self, url: &str, api_key: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| extract_error_message(&body));
            return Err(AppError::backend_status(
                status.as_u16(),
                message,
                format!("Request failed with status code {}", status.as_u16()),
            ));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<R>(&bytes).map_err(|e| {
            AppError::backend_transport(format!("Failed to decode Gemini response: {}", e))
        })
    }
}

#[async_trait]
impl GeminiBackend for HttpGeminiBackend {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.post(
            &self.settings.model,
            BackendEndpoint::GenerateContent,
            api_key,
            request,
        )
        .await
    }

    async fn embed_content(
        &self,
        api_key: &str,
        request: &EmbedContentRequest,
    ) -> Result<EmbedContentResponse> {
        self.post(
            &self.settings.embedding_model,
            BackendEndpoint::EmbedContent,
            api_key,
            request,
        )
        .await
    }

    async fn batch_embed_contents(
        &self,
        api_key: &str,
        request: &BatchEmbedContentsRequest,
    ) -> Result<BatchEmbedContentsResponse> {
        self.post(
            &self.settings.embedding_model,
            BackendEndpoint::BatchEmbedContents,
            api_key,
            request,
        )
        .await
    }
}

/// Extract `error.message` from a Gemini error body.
///
/// Any other shape yields `None` and the caller reports the status code.
pub fn extract_error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}
