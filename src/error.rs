//! Error types for the salary engine.
//!
//! The calculation functions themselves are infallible; errors only arise
//! while loading a tax regime configuration or parsing caller-supplied values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/regime.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/regime.yaml");
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

    /// A rate table violated one of its invariants.
    #[error("Invalid rate table field '{field}': {message}")]
    InvalidRateTable {
        /// The offending field.
        field: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// No rate table is effective on the requested date.
    #[error("No rate table effective on {date}")]
    RateTableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// A beneficiary category string outside the closed set.
    #[error("Unknown beneficiary category: {value}")]
    UnknownCategory {
        /// The rejected value.
        value: String,
    },

    /// An amount above the largest value the engine accepts.
    #[error("Amount {amount} exceeds the maximum of {max}")]
    AmountOutOfRange {
        /// The rejected amount.
        amount: Decimal,
        /// The largest accepted amount.
        max: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
