//! Configuration management for the gateway.
//!
//! All settings come from environment variables (a `.env` file is loaded
//! first by the binary). Only the Gemini API key matters to request handling,
//! and even that is optional at startup: without it every backend-bound
//! request fails with a configuration error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini endpoint and model names
    #[serde(default)]
    pub gemini: GeminiSettings,

    /// Gemini API key (`GEMINI_API_KEY`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Whether to verify SSL certificates for upstream requests
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// Request timeout in seconds for Gemini calls
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Root directory for static assets
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Server-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where Gemini lives and which models serve generation and embeddings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    pub api_base: String,
    pub model: String,
    pub embedding_model: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

impl GeminiSettings {
    /// Settings pointing at a different API base, e.g. a mock server.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_verify_ssl() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    300
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gemini: GeminiSettings::default(),
            api_key: None,
            verify_ssl: default_verify_ssl(),
            request_timeout_secs: default_request_timeout(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// Recognized variables: `GEMINI_API_KEY`, `GEMINI_API_BASE`,
    /// `GEMINI_MODEL`, `GEMINI_EMBEDDING_MODEL`, `HOST`, `PORT`,
    /// `VERIFY_SSL`, `REQUEST_TIMEOUT_SECS`, `STATIC_DIR`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        // Empty values are treated as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        config.api_key = var("GEMINI_API_KEY");

        if let Some(api_base) = var("GEMINI_API_BASE") {
            config.gemini.api_base = api_base.trim_end_matches('/').to_string();
        }
        if let Some(model) = var("GEMINI_MODEL") {
            config.gemini.model = model;
        }
        if let Some(model) = var("GEMINI_EMBEDDING_MODEL") {
            config.gemini.embedding_model = model;
        }

        if let Some(host) = var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = var("PORT") {
            config.server.port = port
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }

        if let Some(verify_ssl) = var("VERIFY_SSL") {
            config.verify_ssl = str_to_bool(&verify_ssl);
        }
        if let Some(timeout) = var("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout
                .parse::<u64>()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS value: {}", timeout))?;
        }

        if let Some(dir) = var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

/// Convert string to boolean.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive)
fn str_to_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
