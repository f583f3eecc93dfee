mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod numfmt;
mod report;
mod types;

use crate::error::MarketError;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_REPORT: i32 = 1;
    pub const INVALID_CONFIG: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: cli::Cli) -> Result<i32, MarketError> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let weights = loaded.weights();

    match cli.command {
        cli::Commands::Report(cmd) => {
            let people = input::load_people(&cmd.input)?;
            let Some(market_report) = analyze::generate_report(&people, &weights) else {
                warn!(input = %cmd.input.display(), "input contained no people");
                eprintln!("no report: {} contains no people", cmd.input.display());
                return Ok(exit_code::NO_REPORT);
            };

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&market_report, output_format)?;
            println!("{rendered}");
            info!(people = market_report.total_people, "report generated");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights(_) => {
            for (name, weight) in weights.as_array() {
                println!("{name} = {}", numfmt::decimal_string(weight));
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_config() {
                exit_code::INVALID_CONFIG
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
