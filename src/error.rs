//! Error types for the Charge Rate Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading defaults,
//! validating configuration and composing charge rates.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Charge Rate Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use charge_rate_engine::error::EngineError;
///
/// let error = EngineError::CategoryNotFound {
///     code: "apprentice_year_9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Worker category not found: apprentice_year_9");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
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

    /// Worker category code was not found in the configuration.
    #[error("Worker category not found: {code}")]
    CategoryNotFound {
        /// The category code that was not found.
        code: String,
    },

    /// A caller-supplied configuration value is structurally invalid.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Unbilled time consumes all of the working year.
    #[error("Billable capacity exhausted by unbilled time: {billable_hours} billable hours remain")]
    BillableCapacityExhausted {
        /// The (zero or negative) billable hours that were computed.
        billable_hours: Decimal,
    },

    /// A quantity could not be represented (division by zero or overflow).
    #[error("Non-finite result computing {quantity}")]
    NonFiniteResult {
        /// The name of the quantity that could not be computed.
        quantity: String,
    },
}

impl EngineError {
    /// Returns a stable, machine-readable code for this error.
    ///
    /// These codes are recorded on worker profiles whose evaluation failed.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            EngineError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            EngineError::BillableCapacityExhausted { .. } => "BILLABLE_CAPACITY_EXHAUSTED",
            EngineError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn non_finite(quantity: &str) -> Self {
        EngineError::NonFiniteResult {
            quantity: quantity.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
