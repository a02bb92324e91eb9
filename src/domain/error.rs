//! Error types for the Synoscope crate.
//!
//! This module defines the centralized error type [`SynoscopeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Lookup failures (network, status, decoding) are deliberately not part of this
//! enum: they never escape the orchestrators and are modelled by
//! [`crate::client::LookupError`], which travels inside completion events.

use thiserror::Error;

/// The main error type for Synoscope operations.
///
/// Covers everything that can fail outside the session state machine itself:
/// configuration loading, HTTP client construction and terminal I/O in the
/// binary.
///
/// # Examples
///
/// ```
/// use synoscope::SynoscopeError;
///
/// fn validate_config() -> Result<(), SynoscopeError> {
///     Err(SynoscopeError::Config("history_capacity must be positive".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SynoscopeError {
    /// Configuration is invalid or could not be read.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// A TOML configuration document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A specialized `Result` type for Synoscope operations.
pub type Result<T> = std::result::Result<T, SynoscopeError>;
