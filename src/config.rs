//! Configuration for dnsimple-ddns.
//!
//! Everything comes from the command line. A [`Config`] is built once,
//! validated up front, and never mutated afterwards.

use crate::error::{DdnsError, Result};
use crate::resolver::ResponseFormat;

const V1_IP_SERVICE: &str = "http://ipv4.jsonip.com/";
const V2_IP_SERVICE: &str = "https://api.ipify.org";

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials and target record.
    pub provider: ProviderConfig,

    /// Endpoint overrides.
    pub endpoints: Endpoints,
}

/// Provider configuration, one variant per DNSimple API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    /// Legacy v1 API, authenticated with `email:token`.
    V1 {
        email: String,
        api_token: String,
        domain: String,
        record_id: u64,
    },

    /// v2 API, authenticated with an OAuth bearer token.
    V2 {
        access_token: String,
        account_id: String,
        zone_id: String,
        record_id: String,
    },
}

/// Optional endpoint overrides. `None` means the per-version default.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    pub ip_service: Option<String>,
    pub api_base_url: Option<String>,
}

fn require(flag: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DdnsError::MissingConfiguration(flag)),
    }
}

impl ProviderConfig {
    /// Build a v1 configuration, checking fields in flag order.
    pub fn v1(
        email: Option<String>,
        api_token: Option<String>,
        domain: Option<String>,
        record_id: Option<u64>,
    ) -> Result<Self> {
        Ok(ProviderConfig::V1 {
            email: require("email", email)?,
            api_token: require("token", api_token)?,
            domain: require("domain", domain)?,
            record_id: record_id.ok_or(DdnsError::MissingConfiguration("record"))?,
        })
    }

    /// Build a v2 configuration, checking fields in flag order.
    pub fn v2(
        access_token: Option<String>,
        account_id: Option<String>,
        zone_id: Option<String>,
        record_id: Option<String>,
    ) -> Result<Self> {
        Ok(ProviderConfig::V2 {
            access_token: require("token", access_token)?,
            account_id: require("account", account_id)?,
            zone_id: require("zone", zone_id)?,
            record_id: require("record", record_id)?,
        })
    }

    pub fn default_ip_service(&self) -> &'static str {
        match self {
            ProviderConfig::V1 { .. } => V1_IP_SERVICE,
            ProviderConfig::V2 { .. } => V2_IP_SERVICE,
        }
    }

    /// The v1 echo service answers in JSON, the v2 one in plain text.
    pub fn ip_response_format(&self) -> ResponseFormat {
        match self {
            ProviderConfig::V1 { .. } => ResponseFormat::Json,
            ProviderConfig::V2 { .. } => ResponseFormat::PlainText,
        }
    }
}

impl Config {
    pub fn new(provider: ProviderConfig, endpoints: Endpoints) -> Self {
        Self {
            provider,
            endpoints,
        }
    }

    /// DNSimple API base URL override, without a trailing slash.
    pub fn api_base_url(&self) -> Option<String> {
        self.endpoints
            .api_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
    }

    /// Effective IP echo service URL.
    pub fn ip_service(&self) -> String {
        self.endpoints
            .ip_service
            .clone()
            .unwrap_or_else(|| self.provider.default_ip_service().to_string())
    }
}
