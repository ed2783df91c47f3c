//! Triage - interactive waiting-room shell
//!
//! Reads commands from stdin, drives the core Registry and renders results.

mod logging;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use logging::LogFormat;
use shell::{Shell, ShellOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use triage_core::config::{DEFAULT_CAPACITY, DEFAULT_CATEGORY_COUNT};
use triage_core::port::id_provider::UuidTicketProvider;
use triage_core::port::time_provider::SystemTimeProvider;
use triage_core::{Registry, RegistryConfig};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Per-specialization patient queues with urgent/regular triage", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of specializations
    #[arg(long, env = "TRIAGE_CATEGORIES", default_value_t = DEFAULT_CATEGORY_COUNT)]
    categories: usize,

    /// Maximum waiting patients per specialization
    #[arg(long, env = "TRIAGE_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Print listings and statistics as JSON
    #[arg(long, env = "TRIAGE_JSON")]
    json: bool,

    /// Write logs to a daily rolling file in this directory
    #[arg(long, env = "TRIAGE_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log record format
    #[arg(long, env = "TRIAGE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init_logging(cli.log_format, cli.log_dir.as_deref())?;

    info!("Triage v{} starting...", triage_core::VERSION);

    let config = RegistryConfig::new(cli.categories, cli.capacity);
    let registry = Registry::new(config, Arc::new(SystemTimeProvider), Arc::new(UuidTicketProvider))
        .context("Invalid registry configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        stdin.lock(),
        stdout.lock(),
        registry,
        ShellOptions { json: cli.json },
    );
    shell.run()?;

    info!(
        still_waiting = shell.registry().total_waiting(),
        "Session ended"
    );

    Ok(())
}
