//! Calculator configuration
//!
//! Presentation settings for the command line tool, loaded from an optional
//! YAML file. Every field has a default so an empty document is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;

/// Maximum number of decimals accepted for printed frequencies.
pub const MAX_FREQUENCY_PRECISION: usize = 6;

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_level: LogLevel,
    /// Number of decimals used when printing frequencies in MHz
    #[serde(default = "default_frequency_precision")]
    pub frequency_precision: usize,
}

fn default_frequency_precision() -> usize {
    2
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            frequency_precision: default_frequency_precision(),
        }
    }
}

impl CalculatorConfig {
    /// Parses a configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use nrfreq_common::CalculatorConfig;
    ///
    /// let config = CalculatorConfig::from_yaml("log_level: debug\n").unwrap();
    /// assert_eq!(config.frequency_precision, 2);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Returns
    /// * `Ok(CalculatorConfig)` - Successfully loaded configuration
    /// * `Err(Error)` - File I/O, YAML parsing or validation error
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that all values are within their accepted ranges.
    pub fn validate(&self) -> Result<(), Error> {
        if self.frequency_precision > MAX_FREQUENCY_PRECISION {
            return Err(Error::Config(format!(
                "frequency_precision {} exceeds maximum of {}",
                self.frequency_precision, MAX_FREQUENCY_PRECISION
            )));
        }
        Ok(())
    }
}
