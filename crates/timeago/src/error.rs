//! Error types for age expression parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid amount in '{token}': {reason}")]
    InvalidAmount { token: String, reason: String },

    #[error("Invalid fixed duration '{expression}': {reason}")]
    InvalidFixedDuration {
        expression: String,
        reason: FixedDurationError,
    },

    #[error("Result out of range: {0}")]
    OutOfRange(String),
}

/// Failures of the fixed-length duration grammar (`"1h30m"`, `"-1.5s"`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedDurationError {
    #[error("empty duration")]
    Empty,

    #[error("malformed number in '{0}'")]
    InvalidNumber(String),

    #[error("missing unit in '{0}'")]
    MissingUnit(String),

    #[error("unknown unit '{unit}' in '{input}'")]
    UnknownUnit { unit: String, input: String },

    #[error("'{0}' exceeds the representable range")]
    Overflow(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Parsing min-age: {0}")]
    MinAge(ParseError),

    #[error("Parsing max-age: {0}")]
    MaxAge(ParseError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
