mod cli;
mod client;
mod config;
mod error;
mod metrics;
mod recommend;
mod report;
mod types;

use crate::client::{JellyfinClient, MediaApi};
use crate::error::{GaugeError, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEGRADED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Report(cmd) => {
            let deadline = Duration::from_secs(
                cmd.timeout.unwrap_or(config.limits.overall_deadline_secs),
            );
            let client = JellyfinClient::new(&config)?;
            let api: Arc<dyn MediaApi> = Arc::new(client);

            let scores = metrics::run_all(api, deadline).await;
            let recommendation = recommend::recommend(&scores);

            let format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&scores, recommendation, format)?;
            println!("{rendered}");

            if scores.degraded {
                Ok(exit_code::DEGRADED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Check(_) => {
            let client = JellyfinClient::new(&config)?;
            let plugins = client.plugins().await?;
            println!(
                "server {} is reachable ({} plugins installed)",
                config.server.url,
                plugins.len()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            let code = match e {
                GaugeError::ConfigNotFound(_)
                | GaugeError::ConfigParse(_)
                | GaugeError::MissingSetting(_) => exit_code::CONFIG_ERROR,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
