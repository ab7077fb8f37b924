//! Custom error types for shelf-scrape
//!
//! Only faults that indicate misconfiguration end up here. A non-200 response
//! is not an error; it is reported through [`crate::core::FetchOutcome`].

use thiserror::Error;

/// Main error type for shelf-scrape operations
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Transport failure or a URL reqwest refused to build a request for
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSS selector that could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for shelf-scrape operations
pub type Result<T> = std::result::Result<T, ShelfError>;

impl ShelfError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a selector error
    pub fn selector(selector: impl Into<String>, reason: impl ToString) -> Self {
        Self::Selector {
            selector: selector.into(),
            reason: reason.to_string(),
        }
    }
}
