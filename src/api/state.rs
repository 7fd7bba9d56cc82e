//! Shared state for the staff ledger router.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::{Currency, CurrencyRate};

/// Ledger defaults every handler can fall back on.
///
/// Requests carry their own data snapshot; only the display currency and the
/// seeded rate table come from here.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing across handlers.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Resolves a requested display currency, defaulting to the configured one.
    pub fn display_currency_or_default(&self, requested: Option<Currency>) -> Currency {
        requested.unwrap_or_else(|| self.config.display_currency())
    }

    /// Resolves a request's rate table, defaulting to the seeded table.
    pub fn rates_or_default(&self, requested: Option<Vec<CurrencyRate>>) -> Vec<CurrencyRate> {
        requested.unwrap_or_else(|| self.config.default_rates().to_vec())
    }
}
