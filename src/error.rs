//! Error types for the staff ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only malformed required inputs and collaborator failures are errors; missing
//! financial data (such as an unknown currency rate) is handled fail-soft by the
//! calculation layer and never surfaces here.

use thiserror::Error;

/// The main error type for the staff ledger.
///
/// # Example
///
/// ```
/// use staff_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A report period does not describe a real calendar month or year.
    #[error("Invalid report period: year {year}, month {month:?}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month, if any.
        month: Option<u32>,
    },

    /// A series asked for more months than the ledger will compute at once.
    #[error("Series of {requested} months exceeds the maximum of {max}")]
    SeriesTooLong {
        /// The requested number of months.
        requested: u32,
        /// The largest accepted number of months.
        max: u32,
    },

    /// A monetary calculation left the representable Decimal range.
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow {
        /// The calculation that overflowed.
        operation: String,
    },

    /// No employee with the given identifier exists.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The persistence collaborator failed to serve a request.
    #[error("Data source error: {message}")]
    DataSource {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
