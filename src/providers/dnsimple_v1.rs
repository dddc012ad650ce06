//! DNSimple v1 API provider.

use super::{json_request, DnsProvider, UpdateResult};
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

pub(super) const DEFAULT_BASE_URL: &str = "https://api.dnsimple.com/v1";

/// DNSimple v1 provider, authenticated with `X-DNSimple-Token: email:token`.
pub struct DnsimpleV1Provider {
    client: reqwest::Client,
    email: String,
    api_token: String,
    domain: String,
    record_id: u64,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    record: RecordContent<'a>,
}

#[derive(Debug, Serialize)]
struct RecordContent<'a> {
    content: &'a str,
}

impl DnsimpleV1Provider {
    /// Create a new DNSimple v1 provider.
    pub fn new(email: String, api_token: String, domain: String, record_id: u64) -> Self {
        Self::with_base_url(
            email,
            api_token,
            domain,
            record_id,
            DEFAULT_BASE_URL.to_string(),
        )
    }

    /// Create with custom base URL (for testing).
    pub fn with_base_url(
        email: String,
        api_token: String,
        domain: String,
        record_id: u64,
        base_url: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            email,
            api_token,
            domain,
            record_id,
            base_url,
        }
    }

    fn record_url(&self) -> String {
        format!(
            "{}/domains/{}/records/{}",
            self.base_url, self.domain, self.record_id
        )
    }

    fn auth_header(&self) -> String {
        format!("{}:{}", self.email, self.api_token)
    }
}

#[async_trait]
impl DnsProvider for DnsimpleV1Provider {
    fn name(&self) -> &'static str {
        "dnsimple-v1"
    }

    fn record(&self) -> String {
        format!("{}#{}", self.domain, self.record_id)
    }

    async fn update_ip(&self, ip: &str) -> Result<UpdateResult> {
        let url = self.record_url();
        let request = UpdateRequest {
            record: RecordContent { content: ip },
        };

        tracing::debug!("PUT {}", url);

        let response = json_request(self.client.put(&url))
            .header("X-DNSimple-Token", self.auth_header())
            .json(&request)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            tracing::debug!(
                "{} update of {} failed: {}",
                self.name(),
                self.record(),
                response.status()
            );
            return Err(DdnsError::UnexpectedStatus {
                service: "DNSimple update".to_string(),
                status: response.status().to_string(),
                body: None,
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
