//! DNSimple v2 API provider.

use super::{json_request, DnsProvider, UpdateResult};
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

pub(super) const DEFAULT_BASE_URL: &str = "https://api.dnsimple.com/v2";

/// DNSimple v2 provider, authenticated with an OAuth bearer token.
pub struct DnsimpleV2Provider {
    client: reqwest::Client,
    access_token: String,
    account_id: String,
    zone_id: String,
    record_id: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    content: &'a str,
}

impl DnsimpleV2Provider {
    /// Create a new DNSimple v2 provider.
    pub fn new(
        access_token: String,
        account_id: String,
        zone_id: String,
        record_id: String,
    ) -> Self {
        Self::with_base_url(
            access_token,
            account_id,
            zone_id,
            record_id,
            DEFAULT_BASE_URL.to_string(),
        )
    }

    /// Create with custom base URL (for testing).
    pub fn with_base_url(
        access_token: String,
        account_id: String,
        zone_id: String,
        record_id: String,
        base_url: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
            account_id,
            zone_id,
            record_id,
            base_url,
        }
    }

    fn record_url(&self) -> String {
        format!(
            "{}/{}/zones/{}/records/{}",
            self.base_url, self.account_id, self.zone_id, self.record_id
        )
    }
}

#[async_trait]
impl DnsProvider for DnsimpleV2Provider {
    fn name(&self) -> &'static str {
        "dnsimple-v2"
    }

    fn record(&self) -> String {
        format!("{}/{}#{}", self.account_id, self.zone_id, self.record_id)
    }

    async fn update_ip(&self, ip: &str) -> Result<UpdateResult> {
        let url = self.record_url();

        tracing::debug!("PATCH {}", url);

        let response = json_request(self.client.patch(&url))
            .bearer_auth(&self.access_token)
            .json(&UpdateRequest { content: ip })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // The body usually explains why, e.g. a validation error on the content.
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                "{} update of {} failed: {}",
                self.name(),
                self.record(),
                status
            );
            return Err(DdnsError::UnexpectedStatus {
                service: "DNSimple update".to_string(),
                status: status.to_string(),
                body: Some(body),
            });
        }

        Ok(UpdateResult {
            provider: self.name().to_string(),
            record: self.record(),
            ip: ip.to_string(),
            timestamp: chrono::Utc::now(),
        })
    }
}
