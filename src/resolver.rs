//! Public IP resolution.

use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Body shape returned by an IP echo service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// `{"ip": "<addr>"}`
    Json,
    /// The bare address, possibly followed by a newline.
    PlainText,
}

#[derive(Debug, Deserialize)]
struct IpEnvelope {
    ip: String,
}

/// Anything that can tell us our current public address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Resolve the public IPv4 address as opaque text.
    async fn resolve(&self) -> Result<String>;
}

/// Resolver backed by a single HTTP echo service.
pub struct IpResolver {
    client: reqwest::Client,
    service: String,
    format: ResponseFormat,
}

impl IpResolver {
    /// Create a resolver for the given service and body format.
    pub fn new(service: String, format: ResponseFormat) -> Self {
        Self {
            client: reqwest::Client::new(),
            service,
            format,
        }
    }

    fn parse(&self, body: &str) -> Result<String> {
        match self.format {
            ResponseFormat::Json => {
                let envelope: IpEnvelope = serde_json::from_str(body)?;
                Ok(envelope.ip.trim().to_string())
            }
            ResponseFormat::PlainText => Ok(body.trim().to_string()),
        }
    }
}

#[async_trait]
impl IpSource for IpResolver {
    async fn resolve(&self) -> Result<String> {
        tracing::debug!("Resolving public IP via {}", self.service);

        let response = self.client.get(&self.service).send().await?;

        if !response.status().is_success() {
            return Err(DdnsError::UnexpectedStatus {
                service: format!("IP lookup ({})", self.service),
                status: response.status().to_string(),
                body: None,
            });
        }

        let text = response.text().await?;
        let ip = self.parse(&text)?;

        tracing::debug!("Resolved public IP {} from {}", ip, self.service);
        Ok(ip)
    }
}
