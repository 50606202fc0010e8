use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jellygauge",
    version,
    about = "Jellyfin library quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the config file (default: ./jellygauge.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Report(ReportCommand),
    Check(CheckCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ReportCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Overall deadline in seconds for the metric run
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Args)]
pub struct CheckCommand {}
