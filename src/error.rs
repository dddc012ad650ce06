//! Error types for dnsimple-ddns.

use thiserror::Error;

/// Result type alias for dnsimple-ddns.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// A required flag was absent or empty.
    #[error("Missing required configuration: --{0}")]
    MissingConfiguration(&'static str),

    /// Network/HTTP transport error.
    #[error("Network error: {0}")]
    Network(String),

    /// A remote endpoint answered with a status we do not accept.
    #[error(
        "{service} request responded with {status}{}",
        .body.as_deref().map(|b| format!(": {}", b)).unwrap_or_default()
    )]
    UnexpectedStatus {
        service: String,
        status: String,
        body: Option<String>,
    },

    /// Malformed response body.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DdnsError::Decode(e.to_string())
        } else {
            DdnsError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DdnsError {
    fn from(e: serde_json::Error) -> Self {
        DdnsError::Decode(e.to_string())
    }
}
