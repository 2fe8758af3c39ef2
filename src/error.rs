//! Error types for the provider and configuration layers.
//!
//! The risk engine and summary generator are total and have no error type.

use thiserror::Error;

/// Errors that can arise when fetching or parsing observation feeds.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure: DNS, connect, timeout, TLS.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP response.
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but not the shape the feed is documented to return.
    #[error("Malformed feed: {0}")]
    Malformed(String),

    /// The source has no feed for this collection.
    #[error("No data feed available for {0}")]
    Unsupported(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
