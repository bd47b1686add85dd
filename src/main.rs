//! usage-walker - Recursive Disk Usage Walker
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use usage_walker::config::{CliArgs, WalkConfig};
use usage_walker::output::print_lines;
use usage_walker::progress::{print_summary, LogWriter, ProgressReporter};
use usage_walker::{Aggregator, LocalFs};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Validate and create config
    let config = WalkConfig::from_args(args).context("Invalid configuration")?;

    let progress = if config.show_progress {
        Some(ProgressReporter::new())
    } else {
        None
    };

    // Setup logging; with a spinner, log lines suspend it while printing
    let log_writer = progress
        .as_ref()
        .map_or_else(LogWriter::stderr, ProgressReporter::log_writer);
    setup_logging(config.verbose, log_writer)?;

    // Fold and expansion run on this one thread; tokio::fs offloads the
    // blocking lookups
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create async runtime")?;

    if let Some(ref p) = progress {
        p.set_status(&format!("Scanning {}...", config.root));
    }

    let aggregator = Aggregator::new(LocalFs::new());
    let outcome = runtime.block_on(aggregator.aggregate_with_progress(&config.root, |update| {
        if let Some(ref p) = progress {
            p.update(update);
        }
    }));

    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    print_lines(&outcome.tables).context("Failed to write results")?;

    if config.show_progress {
        print_summary(&config.root, &outcome.stats);
    }

    Ok(())
}

fn setup_logging(verbose: bool, writer: LogWriter) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ if verbose => EnvFilter::new("usage_walker=debug,warn"),
        _ => EnvFilter::new("usage_walker=info,warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
