//! Core error types for the FOP assistant.
//!
//! This module defines transport-agnostic error types. Gateway-specific
//! failures (reqwest, Supabase responses, etc.) are converted to these
//! types by the gateway crate.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while talking to the remote service.
///
/// The gateway performs no retries and no caching: a transport failure
/// is wrapped here and handed to the caller unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Api(ApiError::Decode(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
