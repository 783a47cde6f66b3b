//! Error types for the phone detector bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while interpreting a phone-number candidate.
#[derive(Error, Debug)]
pub enum PhoneError {
    /// No region interpretation produced an acceptable parse.
    #[error("Could not parse phone number")]
    Unresolvable,

    /// The phone grammar collaborator rejected the candidate or failed.
    #[error("phone grammar error: {0}")]
    Grammar(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when delivering outbound messages.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The chat transport failed to send a message
    #[error("failed to send message: {0}")]
    Send(String),
}

/// Convenience type alias for Results with PhoneError
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with TransportError
pub type TransportResult<T> = Result<T, TransportError>;
