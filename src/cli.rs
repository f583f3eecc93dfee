use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "market-report",
    version,
    about = "Demographic market report and fit score CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file used instead of ./market-report.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a report from person records
    Report(ReportCommand),
    /// Print the effective scoring weights
    Weights(WeightsCommand),
}

#[derive(Args)]
pub struct ReportCommand {
    /// JSON array file, JSON Lines file, or directory of person files
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct WeightsCommand {}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
