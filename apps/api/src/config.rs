use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::embeddings::download::default_model_dir;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional: the cover-letter endpoint fails on first use when unset.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub embedding_model_dir: PathBuf,
    pub embedding_auto_download: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: parse_or(&lookup, "PORT", 8000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            llm_temperature: parse_or(&lookup, "LLM_TEMPERATURE", 0.7)?,
            llm_max_tokens: parse_or(&lookup, "LLM_MAX_TOKENS", 800)?,
            embedding_model_dir: lookup("EMBEDDING_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_model_dir),
            embedding_auto_download: parse_or(&lookup, "EMBEDDING_AUTO_DOWNLOAD", true)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}
