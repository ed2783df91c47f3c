//! Logging setup
//!
//! stdout belongs to the interactive menu, so log records go either to a
//! daily rolling file (when a log directory is configured) or to stderr at a
//! quieter default level.

use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "triage.log";
const FILE_DEFAULT_FILTER: &str = "triage=info";
const STDERR_DEFAULT_FILTER: &str = "triage=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, multi-line records
    Pretty,
    /// One JSON object per record
    Json,
}

/// Initialize the global subscriber
///
/// `RUST_LOG` overrides the default filter. The returned guard must be kept
/// alive until exit so buffered file output is flushed.
pub fn init_logging(format: LogFormat, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let fallback = if log_dir.is_some() {
        FILE_DEFAULT_FILTER
    } else {
        STDERR_DEFAULT_FILTER
    };
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            match format {
                LogFormat::Json => tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().with_writer(writer))
                    .try_init()?,
                LogFormat::Pretty => tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().pretty().with_ansi(false).with_writer(writer))
                    .try_init()?,
            }

            Ok(Some(guard))
        }
        None => {
            match format {
                LogFormat::Json => tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init()?,
                LogFormat::Pretty => tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init()?,
            }

            Ok(None)
        }
    }
}
