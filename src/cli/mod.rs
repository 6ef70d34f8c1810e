//! CLI argument parsing

mod common;

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;
use crate::error::{ReportError, Result};
use crate::report::RunSettings;
use crate::tokens::IntegrationCredentials;

pub use common::OutputFormat;

/// Webex Calling partner report
#[derive(Parser, Debug)]
#[command(name = "webex-calling-report")]
#[command(version)]
#[command(
    about = "Generate Webex Calling license, number and trunk reports across customer organizations",
    long_about = None
)]
pub struct Cli {
    /// Webex access token (skips the token store)
    #[arg(short = 't', long, env = "WEBEX_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Token store file (default: ./tokens.json, else ~/.webex-calling-report/tokens.json)
    #[arg(long)]
    pub tokens_file: Option<PathBuf>,

    /// Integration client id used to refresh an expired access token
    #[arg(long, env = "WEBEX_CLIENT_ID")]
    pub webex_client_id: Option<String>,

    /// Integration client secret used to refresh an expired access token
    #[arg(long, env = "WEBEX_CLIENT_SECRET", hide_env_values = true)]
    pub webex_client_secret: Option<String>,

    /// Display name of the partner organization (never reported on)
    #[arg(short = 'p', long, env = "WEBEX_PARTNER_ORG")]
    pub partner_org: String,

    /// Only report on these organizations (display name, repeatable)
    #[arg(short = 'o', long = "org")]
    pub orgs: Vec<String>,

    /// Look up subscription start/end dates in the commerce API
    #[arg(
        long,
        env = "CCW_INTEGRATION",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub subscription_dates: bool,

    /// Commerce API client id
    #[arg(long, env = "CCW_CLIENT_ID")]
    pub ccw_client_id: Option<String>,

    /// Commerce API client secret
    #[arg(long, env = "CCW_CLIENT_SECRET", hide_env_values = true)]
    pub ccw_client_secret: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Directory for report artifacts
    #[arg(long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory for run logs
    #[arg(long, default_value = defaults::LOG_DIR)]
    pub log_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress bars
    #[arg(short = 'b', long, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Organizations covered by the run
    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            partner_org: self.partner_org.clone(),
            allow_list: self.orgs.clone(),
        }
    }

    /// Commerce credentials; `None` when the subscription-date lookup is off
    pub fn commerce_credentials(&self) -> Result<Option<(String, String)>> {
        if !self.subscription_dates {
            return Ok(None);
        }
        match (&self.ccw_client_id, &self.ccw_client_secret) {
            (Some(id), Some(secret)) => Ok(Some((id.clone(), secret.clone()))),
            _ => Err(ReportError::Config(
                "--ccw-client-id and --ccw-client-secret (CCW_CLIENT_ID / CCW_CLIENT_SECRET) \
                 are required with --subscription-dates"
                    .to_string(),
            )),
        }
    }

    /// Integration credentials for token refresh, when both are set
    pub fn integration_credentials(&self) -> Option<IntegrationCredentials> {
        match (&self.webex_client_id, &self.webex_client_secret) {
            (Some(id), Some(secret)) => Some(IntegrationCredentials {
                client_id: id.clone(),
                client_secret: secret.clone(),
            }),
            _ => None,
        }
    }
}
