//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Currency, CurrencyRate};

use super::types::{LedgerConfig, RatesFile, Settings};

/// Loads and provides access to ledger configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # Display currency and server settings
/// └── rates.yaml      # Seeded exchange-rate table
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Reporting in {}", loader.display_currency());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if a file is missing and `ConfigParseError` if
    /// a file is not valid YAML for its schema.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        let rates = Self::load_yaml::<RatesFile>(&path.join("rates.yaml"))?;

        Ok(Self {
            config: LedgerConfig::new(settings, rates.rates),
        })
    }

    /// Builds a loader from already-parsed configuration.
    pub fn from_config(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the configured display currency.
    pub fn display_currency(&self) -> Currency {
        self.config.settings().display_currency
    }

    /// Returns the seeded exchange-rate table.
    pub fn default_rates(&self) -> &[CurrencyRate] {
        self.config.default_rates()
    }

    /// Returns the address the HTTP server binds to.
    pub fn bind_address(&self) -> &str {
        &self.config.settings().server.bind_address
    }
}
