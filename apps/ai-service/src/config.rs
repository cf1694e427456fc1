use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "gpt-4";
const DEFAULT_EMBEDDING_API_URL: &str = "https://api.openai.com/v1/embeddings";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub embedding_api_url: String,
    pub embedding_api_key: String,
    pub embedding_model: String,
    pub http_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .with_context(|| "Required environment variable 'OPENAI_API_KEY' is not set")?;
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_secs = or_default("HTTP_TIMEOUT_SECS", "120")
            .parse::<u64>()
            .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?;
        let max_upload_mb = or_default("MAX_UPLOAD_MB", "10")
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number")?;

        Ok(Config {
            embedding_api_key: lookup("EMBEDDING_API_KEY").unwrap_or_else(|| openai_api_key.clone()),
            openai_api_key,
            llm_api_url: or_default("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_model: or_default("LLM_MODEL", DEFAULT_LLM_MODEL),
            embedding_api_url: or_default("EMBEDDING_API_URL", DEFAULT_EMBEDDING_API_URL),
            embedding_model: or_default("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            http_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            port: or_default("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }
}
