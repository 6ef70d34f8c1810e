//! Webex Calling partner report - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use webex_calling_report::config::defaults;
use webex_calling_report::ui::{clear_spinner, create_spinner, finish_spinner};
use webex_calling_report::{
    write_report, Cli, CommerceClient, ConsoleReporter, Destination, ReportDriver, Reporter,
    Result, RunLog, TokenResolver, TokenStore, WebexClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting webex-calling-report v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: partner_org={}, orgs={:?}, subscription_dates={}, format={}, output_dir={}",
        cli.partner_org,
        cli.orgs,
        cli.subscription_dates,
        cli.format,
        cli.output_dir.display()
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let stamp = chrono::Local::now()
        .format(defaults::STAMP_FORMAT)
        .to_string();
    let run_log = RunLog::create(&cli.log_dir, &stamp)?;
    let reporter = ConsoleReporter::new(Some(run_log), cli.batch);

    let result = generate(cli, &reporter, &stamp).await;
    if let Err(e) = &result {
        reporter.error(&e.to_string());
    }

    let had_errors = result.as_ref().map(|h| *h).unwrap_or(true);
    if let Some(log) = reporter.run_log() {
        let path = log.finish(had_errors)?;
        println!("Run log saved to `{}`", path.display());
    }

    if had_errors {
        info!("Completed with some errors");
    } else {
        info!("Completed successfully");
    }
    result.map(|_| ())
}

/// Resolve credentials, run the report and write it; returns the run-level error flag
async fn generate(cli: &Cli, reporter: &ConsoleReporter, stamp: &str) -> Result<bool> {
    let commerce = cli
        .commerce_credentials()?
        .map(|(id, secret)| CommerceClient::new(id, secret));

    let store = match &cli.tokens_file {
        Some(path) => TokenStore::with_path(path.clone()),
        None => TokenStore::new(),
    };
    let resolver = TokenResolver::new(store, cli.integration_credentials());

    let spinner = create_spinner("Resolving Webex access token...", cli.batch);
    let token = match resolver.resolve(cli.token.as_deref()).await {
        Ok(token) => {
            clear_spinner(spinner);
            token
        }
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    };

    let client = WebexClient::new(token);
    let driver = ReportDriver::new(&client, commerce.as_ref(), reporter, cli.run_settings());
    let run = driver.run().await?;

    if !run.has_report() {
        return Ok(run.had_errors);
    }

    let destination = Destination::new(&cli.output_dir, stamp);
    let spinner = create_spinner("Saving report...", cli.batch);
    match write_report(&run.tables, &cli.format, &destination) {
        Ok(Some(path)) => {
            finish_spinner(spinner, "Report saved");
            reporter.info(&format!("New report created: `{}`", path.display()));
        }
        Ok(None) => clear_spinner(spinner),
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    }

    Ok(run.had_errors)
}
