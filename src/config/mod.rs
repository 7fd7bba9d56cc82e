//! Configuration loading and management for the staff ledger.
//!
//! This module provides functionality to load the display currency, server
//! settings and the seeded exchange-rate table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use staff_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("{} default rates", config.default_rates().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LedgerConfig, RatesFile, ServerSettings, Settings};
