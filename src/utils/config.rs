use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Model used when `LLM_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";
/// Endpoint used when `OPENROUTER_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";

/// Complete environment-driven configuration.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub search: SearchConfig,
}

/// Listen address.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Model service credentials and selection.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

/// OpenDeepSearch endpoint configuration. The tool only attempts a real
/// call when all four values are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(missing_docs)]
pub struct SearchConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub serper_key: Option<String>,
    pub openrouter_key: Option<String>,
}

impl SearchConfig {
    /// Whether every value the endpoint needs is present.
    pub fn is_configured(&self) -> bool {
        self.api_url.is_some()
            && self.api_key.is_some()
            && self.serper_key.is_some()
            && self.openrouter_key.is_some()
    }
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // The model credential is the one hard requirement; fail fast.
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| AppError::Config("OPENROUTER_API_KEY must be set".to_string()))?;

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|e| AppError::Config(format!("invalid PORT: {}", e)))?,
            },
            llm: LlmConfig {
                api_base: env::var("OPENROUTER_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
                model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                api_key: api_key.clone(),
            },
            search: SearchConfig {
                api_url: env::var("ODP_API_URL").ok(),
                api_key: env::var("ODP_API_KEY").ok(),
                serper_key: env::var("ODP_SERPER_KEY").ok(),
                openrouter_key: env::var("ODP_OPENROUTER_KEY").ok().or(Some(api_key)),
            },
        })
    }
}
