//! Error types for the Strata core crate.

use thiserror::Error;

/// A specialized Result type for Strata core operations.
pub type StrataResult<T> = Result<T, StrataError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone)]
pub enum StrataError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A futures contract code could not be parsed.
    #[error("Invalid contract code '{code}': {reason}")]
    InvalidContractCode {
        /// The offending code.
        code: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// Parse/deserialization error.
    #[error("Parse error: {reason}")]
    ParseError {
        /// Description of the error.
        reason: String,
    },
}

impl StrataError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid contract code error.
    #[must_use]
    pub fn invalid_contract_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidContractCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::ParseError {
            reason: reason.into(),
        }
    }
}
