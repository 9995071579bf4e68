use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if either upstream API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub serpapi_key: String,
    pub serpapi_base_url: String,
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    /// Append-only search log used for the daily quota.
    pub quota_log_path: PathBuf,
    pub daily_search_quota: usize,
    /// How many provider results are screened per search.
    pub max_candidates: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            serpapi_key: require_env("SERPAPI_KEY")?,
            serpapi_base_url: std::env::var("SERPAPI_BASE_URL")
                .unwrap_or_else(|_| crate::search::serpapi::SERPAPI_BASE_URL.to_string()),
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| crate::llm_client::GEMINI_API_BASE.to_string()),
            quota_log_path: std::env::var("QUOTA_LOG_PATH")
                .unwrap_or_else(|_| "serpapi_usage.log".to_string())
                .into(),
            daily_search_quota: parse_env("DAILY_SEARCH_QUOTA", 25)?,
            max_candidates: parse_env("MAX_CANDIDATES", 15)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
