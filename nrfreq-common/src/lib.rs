//! Common types and utilities for nrfreq
//!
//! This crate provides the shared radio types, configuration structure,
//! error type and logging setup used across the nrfreq crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{CalculatorConfig, MAX_FREQUENCY_PRECISION};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
pub use types::{DuplexMode, FrequencyRange};
