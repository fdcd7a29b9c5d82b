use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

const MIN_LLM_TIMEOUT_SECS: u64 = 30;
const MAX_LLM_TIMEOUT_SECS: u64 = 45;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the LLM scoring path when present.
    pub gemini_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_timeout: Duration::from_secs(MIN_LLM_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let llm_timeout = bounded_llm_timeout(parse_env("LLM_TIMEOUT_SECS", MIN_LLM_TIMEOUT_SECS)?);

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_timeout,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn bounded_llm_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.clamp(MIN_LLM_TIMEOUT_SECS, MAX_LLM_TIMEOUT_SECS))
}

/// Unset and blank variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
