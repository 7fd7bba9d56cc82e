//! Configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Currency, CurrencyRate};

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Currency reports are expressed in unless a request overrides it.
    pub display_currency: Currency,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Contents of `rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// The seeded exchange-rate table.
    pub rates: Vec<CurrencyRate>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    settings: Settings,
    default_rates: Vec<CurrencyRate>,
}

impl LedgerConfig {
    /// Creates a new LedgerConfig from its component parts.
    pub fn new(settings: Settings, default_rates: Vec<CurrencyRate>) -> Self {
        Self {
            settings,
            default_rates,
        }
    }

    /// Returns the general settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the seeded exchange-rate table.
    pub fn default_rates(&self) -> &[CurrencyRate] {
        &self.default_rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_server_defaults() {
        let settings: Settings = serde_yaml::from_str("display_currency: SEK\n").unwrap();
        assert_eq!(settings.display_currency, Currency::Sek);
        assert_eq!(settings.server.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_rates_file() {
        let yaml = r#"
rates:
  - from_currency: USD
    to_currency: IDR
    rate: "15800"
"#;
        let file: RatesFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.rates.len(), 1);
        assert!(file.rates[0].matches(Currency::Usd, Currency::Idr));
    }
}
