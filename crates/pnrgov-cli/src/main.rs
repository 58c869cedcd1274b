//! # pnrgov CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pnrgov_cli::generate::{run_generate, GenerateArgs};
use pnrgov_cli::manifest::{run_manifest, ManifestArgs};
use pnrgov_cli::sample::{run_sample, SampleArgs};

/// PNRGOV toolchain.
///
/// Generates IATA PNRGOV EDIFACT interchanges — single-reservation reports
/// and flight manifests — plus the sample reservation data behind them.
#[derive(Parser, Debug)]
#[command(name = "pnrgov", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one reservation and encode it as a PNRGOV interchange.
    Generate(GenerateArgs),

    /// Generate a flight manifest packing many PNRs onto one flight.
    Manifest(ManifestArgs),

    /// Emit generated reservation graphs as JSON.
    Sample(SampleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Manifest(args) => run_manifest(&args),
        Commands::Sample(args) => run_sample(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
