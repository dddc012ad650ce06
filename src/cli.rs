//! Command-line interface.

use crate::config::{Config, Endpoints, ProviderConfig};
use crate::error::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dnsimple-ddns")]
#[command(about = "Point a DNSimple record at this host's public IPv4 address")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Override the IP echo service URL
    #[arg(long, global = true, hide = true)]
    pub ip_url: Option<String>,

    /// Override the DNSimple API base URL
    #[arg(long, global = true, hide = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

// Required flags are optional at the clap level so that a missing or empty
// value surfaces as `MissingConfiguration` rather than a usage error.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Update a record through the v1 API (email + API token)
    V1 {
        /// DNSimple account email
        #[arg(long)]
        email: Option<String>,

        /// DNSimple v1 API token
        #[arg(long)]
        token: Option<String>,

        /// DNSimple domain name
        #[arg(long)]
        domain: Option<String>,

        /// DNSimple DNS record ID
        #[arg(long)]
        record: Option<u64>,
    },

    /// Update a record through the v2 API (OAuth token)
    V2 {
        /// DNSimple v2 OAuth access token
        #[arg(long)]
        token: Option<String>,

        /// DNSimple account ID
        #[arg(long)]
        account: Option<String>,

        /// DNSimple zone ID
        #[arg(long)]
        zone: Option<String>,

        /// DNSimple DNS record ID
        #[arg(long)]
        record: Option<String>,
    },
}

impl Cli {
    /// Validate the parsed arguments into a [`Config`].
    pub fn into_config(self) -> Result<Config> {
        let provider = match self.command {
            Commands::V1 {
                email,
                token,
                domain,
                record,
            } => ProviderConfig::v1(email, token, domain, record)?,
            Commands::V2 {
                token,
                account,
                zone,
                record,
            } => ProviderConfig::v2(token, account, zone, record)?,
        };

        Ok(Config::new(
            provider,
            Endpoints {
                ip_service: self.ip_url,
                api_base_url: self.api_url,
            },
        ))
    }

    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
