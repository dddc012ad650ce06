//! DNS provider implementations.

mod dnsimple_v1;
mod dnsimple_v2;


pub use dnsimple_v1::DnsimpleV1Provider;
pub use dnsimple_v2::DnsimpleV2Provider;

use crate::config::{Config, ProviderConfig};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::fmt;

/// Result of a DNS update operation.
#[derive(Debug, Clone)]
pub struct UpdateResult {
    /// Provider name.
    pub provider: String,
    /// Record that was updated.
    pub record: String,
    /// New record content.
    pub ip: String,
    /// Timestamp of the update.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DNSimple record {} updated successfully to {}",
            self.record, self.ip
        )
    }
}

/// Trait for DNS providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &'static str;

    /// Get the record being managed.
    fn record(&self) -> String;

    /// Replace the record content with `ip`.
    async fn update_ip(&self, ip: &str) -> Result<UpdateResult>;
}

/// Create a provider from configuration.
pub fn create_provider(config: &Config) -> Box<dyn DnsProvider> {
    match &config.provider {
        ProviderConfig::V1 {
            email,
            api_token,
            domain,
            record_id,
        } => Box::new(DnsimpleV1Provider::with_base_url(
            email.clone(),
            api_token.clone(),
            domain.clone(),
            *record_id,
            config
                .api_base_url()
                .unwrap_or_else(|| dnsimple_v1::DEFAULT_BASE_URL.to_string()),
        )),
        ProviderConfig::V2 {
            access_token,
            account_id,
            zone_id,
            record_id,
        } => Box::new(DnsimpleV2Provider::with_base_url(
            access_token.clone(),
            account_id.clone(),
            zone_id.clone(),
            record_id.clone(),
            config
                .api_base_url()
                .unwrap_or_else(|| dnsimple_v2::DEFAULT_BASE_URL.to_string()),
        )),
    }
}

/// Headers every DNSimple write carries, whatever the API version.
fn json_request(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
}
