//! Logging infrastructure for nrfreq
//!
//! Configurable logging on top of the `tracing` crate. Log output goes to
//! stderr so that calculation results printed on stdout stay machine-readable.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level (default for the command line tool)
    #[default]
    Warn,
    /// Error level - least verbose
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// This should be called once at application startup. The log level can be
/// overridden by the `RUST_LOG` environment variable. Calling it a second
/// time is a no-op.
///
/// # Example
///
/// ```
/// use nrfreq_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Initialize logging with a custom filter string.
///
/// Allows fine-grained control over which modules log at which levels.
///
/// # Example
///
/// ```
/// use nrfreq_common::logging::init_logging_with_filter;
///
/// // Default to warn, but trace every derivation step of the calculator
/// init_logging_with_filter("warn,nrfreq_calc=debug");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}
