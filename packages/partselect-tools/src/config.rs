//! Configuration from the environment.
//!
//! `.env` is loaded first if present, then each field reads its variable:
//! `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`, `PARTSELECT_BASE_URL`,
//! `HTTP_TIMEOUT_SECS` and `PARTSELECT_PROMPTS`. Only the API key is needed,
//! and only by the extraction operations.

use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_RETAILER_BASE_URL: &str = "https://www.partselect.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub retailer_base_url: String,
    pub timeout: Duration,
    pub prompts_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            retailer_base_url: DEFAULT_RETAILER_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prompts_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The API key is optional here; [`Config::require_api_key`] enforces it
    /// for the extraction tools only.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| Error::Config(format!("HTTP_TIMEOUT_SECS must be a number, got {raw:?}")))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            retailer_base_url: env::var("PARTSELECT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_RETAILER_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            prompts_path: env::var("PARTSELECT_PROMPTS").ok().map(PathBuf::from),
        })
    }

    /// Configuration for the retailer-only tools (no completion model).
    pub fn retailer_only(base_url: impl Into<String>) -> Self {
        Self {
            retailer_base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// The OpenAI API key, or a config error when it is not set.
    pub fn require_api_key(&self) -> Result<&str> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| Error::Config("OPENAI_API_KEY not set".into()))
    }
}
