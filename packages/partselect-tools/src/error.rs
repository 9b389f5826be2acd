//! Typed errors for the PartSelect tools.
//!
//! Nothing here is retried or swallowed: every variant reaches the caller.
//! HTML shape surprises are not errors, they classify as invalid.

use thiserror::Error;

/// Result type for PartSelect tool operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Identifier pair key without exactly one delimiter
    #[error("malformed identifier pair key {key:?}: expected exactly one \"_+_\", found {occurrences}")]
    MalformedKey { key: String, occurrences: usize },

    /// Network error talking to the retailer
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Retailer answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Completion API error (non-2xx, empty choices, bad payload)
    #[error("completion error: {0}")]
    Completion(String),

    /// Configuration error (missing API key, invalid settings)
    #[error("config error: {0}")]
    Config(String),

    /// Prompt set could not be decoded
    #[error("prompt set parse error: {0}")]
    Prompts(#[from] serde_json::Error),

    /// Prompt set file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
