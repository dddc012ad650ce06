//! # dnsimple-ddns
//!
//! A Dynamic DNS updater for DNSimple.
//!
//! One run looks up the host's public IPv4 address and writes it as the
//! content of a single DNS record, through either the legacy v1 API or the
//! v2 API.
//!
//! ## Usage
//!
//! ```bash
//! # v1 API
//! dnsimple-ddns v1 --email me@example.com --token TOKEN --domain example.com --record 42
//!
//! # v2 API
//! dnsimple-ddns v2 --token TOKEN --account 1010 --zone example.com --record 42
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod resolver;

pub use cli::Cli;
pub use config::Config;
pub use error::{DdnsError, Result};
pub use providers::{create_provider, DnsProvider, UpdateResult};
pub use resolver::{IpResolver, IpSource};

/// Resolve the public IP, then push it to the provider.
pub async fn run_with(source: &dyn IpSource, provider: &dyn DnsProvider) -> Result<UpdateResult> {
    let ip = source.resolve().await?;
    tracing::info!("Current IP: {}", ip);

    let result = provider.update_ip(&ip).await?;
    tracing::info!(
        "{} ({}) updated to {} at {}",
        result.provider,
        result.record,
        result.ip,
        result.timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(result)
}

/// Run one update against the endpoints named in `config`.
pub async fn run(config: &Config) -> Result<UpdateResult> {
    let source = IpResolver::new(config.ip_service(), config.provider.ip_response_format());
    let provider = create_provider(config);
    run_with(&source, provider.as_ref()).await
}

/// Validate the command line, then run. Nothing touches the network until
/// the configuration is complete.
pub async fn execute(cli: Cli) -> Result<UpdateResult> {
    let config = cli.into_config()?;
    run(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockDnsProvider;
    use crate::resolver::MockIpSource;
    use clap::Parser;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn v2_args<'a>(ip_url: &'a str, api_url: &'a str) -> Vec<&'a str> {
        vec![
            "dnsimple-ddns",
            "--ip-url",
            ip_url,
            "--api-url",
            api_url,
            "v2",
            "--token",
            "tok123",
            "--account",
            "acct1",
            "--zone",
            "zone1",
            "--record",
            "rec1",
        ]
    }

    #[tokio::test]
    async fn test_run_with_passes_resolved_ip() {
        let mut source = MockIpSource::new();
        source
            .expect_resolve()
            .times(1)
            .returning(|| Ok("198.51.100.9".to_string()));

        let mut provider = MockDnsProvider::new();
        provider
            .expect_update_ip()
            .withf(|ip: &str| ip == "198.51.100.9")
            .times(1)
            .returning(|ip| {
                Ok(UpdateResult {
                    provider: "mock".to_string(),
                    record: "rec".to_string(),
                    ip: ip.to_string(),
                    timestamp: chrono::Utc::now(),
                })
            });

        let result = run_with(&source, &provider).await.unwrap();
        assert_eq!(result.ip, "198.51.100.9");
    }

    #[tokio::test]
    async fn test_run_with_stops_on_resolver_error() {
        let mut source = MockIpSource::new();
        source
            .expect_resolve()
            .times(1)
            .returning(|| Err(DdnsError::Network("connection refused".to_string())));

        let mut provider = MockDnsProvider::new();
        provider.expect_update_ip().times(0);

        let result = run_with(&source, &provider).await;
        assert!(matches!(result, Err(DdnsError::Network(_))));
    }

    #[tokio::test]
    async fn test_execute_success() {
        let ip_server = MockServer::start().await;
        let api_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("198.51.100.9\n"))
            .expect(1)
            .mount(&ip_server)
            .await;

        Mock::given(method("PATCH"))
            .and(path("/acct1/zones/zone1/records/rec1"))
            .and(body_json(serde_json::json!({"content": "198.51.100.9"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&api_server)
            .await;

        let ip_url = ip_server.uri();
        let api_url = api_server.uri();
        let cli = Cli::try_parse_from(v2_args(&ip_url, &api_url)).unwrap();

        let result = execute(cli).await.unwrap();
        assert!(result.to_string().contains("198.51.100.9"));
    }

    #[tokio::test]
    async fn test_execute_server_error() {
        let ip_server = MockServer::start().await;
        let api_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("198.51.100.9"))
            .expect(1)
            .mount(&ip_server)
            .await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&api_server)
            .await;

        let ip_url = ip_server.uri();
        let api_url = api_server.uri();
        let cli = Cli::try_parse_from(v2_args(&ip_url, &api_url)).unwrap();

        let err = execute(cli).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_execute_v1_end_to_end() {
        let ip_server = MockServer::start().await;
        let api_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "198.51.100.9"})),
            )
            .expect(1)
            .mount(&ip_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/domains/example.com/records/42"))
            .and(body_json(
                serde_json::json!({"record": {"content": "198.51.100.9"}}),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&api_server)
            .await;

        let ip_url = ip_server.uri();
        let api_url = api_server.uri();
        let cli = Cli::try_parse_from([
            "dnsimple-ddns",
            "--ip-url",
            ip_url.as_str(),
            "--api-url",
            api_url.as_str(),
            "v1",
            "--email",
            "e@x.com",
            "--token",
            "tok123",
            "--domain",
            "example.com",
            "--record",
            "42",
        ])
        .unwrap();

        let result = execute(cli).await.unwrap();
        assert_eq!(result.ip, "198.51.100.9");
    }

    #[tokio::test]
    async fn test_execute_missing_config_makes_no_calls() {
        let ip_server = MockServer::start().await;
        let api_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("198.51.100.9"))
            .expect(0)
            .mount(&ip_server)
            .await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&api_server)
            .await;

        let ip_url = ip_server.uri();
        let api_url = api_server.uri();
        let mut args = v2_args(&ip_url, &api_url);
        // Blank out the --zone value.
        let zone = args.iter().position(|a| *a == "zone1").unwrap();
        args[zone] = "";

        let cli = Cli::try_parse_from(args).unwrap();
        let result = execute(cli).await;
        assert!(matches!(result, Err(DdnsError::MissingConfiguration("zone"))));
    }
}
