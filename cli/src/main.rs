#![deny(missing_docs)]

//! # OAS Lint CLI
//!
//! Command Line Interface for the OpenAPI 3.x validator.
//!
//! Supported Commands:
//! - `validate`: Reports errors, warnings and statistics for documents.
//! - `stats`: Prints statistics for a single document.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod discover;
mod error;
mod output;
mod stats;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI 3.x document linter")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate OpenAPI documents and report errors, warnings and statistics.
    Validate(validate::ValidateArgs),
    /// Print statistics for an OpenAPI document.
    Stats(stats::StatsArgs),
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Validate(args) => validate::execute(args, &mut out),
        Commands::Stats(args) => stats::execute(args, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
