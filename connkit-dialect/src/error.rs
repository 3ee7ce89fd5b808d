//! Error types for connection URL decoding and encoding.
//!
//! Exactly two kinds of failure leave the codec:
//!
//! - [`DialectError::UnknownDialect`]: no registered grammar owns the input.
//! - [`DialectError::MalformedUrl`]: a grammar was selected but the URL body
//!   does not follow it.
//!
//! ```rust
//! use connkit_dialect::{DatabaseConnectionService, DialectError};
//!
//! let service = DatabaseConnectionService::new();
//! let err = service
//!     .create_connection("org.gjt.mm.mysql.Driver", "jasddbc:mysql://testdb")
//!     .unwrap_err();
//! assert!(err.is_malformed_url());
//! assert!(matches!(err, DialectError::MalformedUrl { .. }));
//! ```

use thiserror::Error;

/// Result type for dialect operations.
pub type DialectResult<T> = Result<T, DialectError>;

/// Errors that can occur while decoding or encoding a connection URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    /// No registered dialect matches the input.
    #[error("unknown database dialect: {0}")]
    UnknownDialect(String),

    /// The owning dialect rejected the URL.
    #[error("malformed {dialect} connection url '{url}': {message}")]
    MalformedUrl {
        /// Short name of the dialect that rejected the URL.
        dialect: &'static str,
        /// The offending URL.
        url: String,
        /// What was wrong with it.
        message: String,
    },
}

impl DialectError {
    /// Create an unknown dialect error for a driver class / URL pair.
    pub fn unknown_driver(driver_class: &str, url: &str) -> Self {
        Self::UnknownDialect(format!(
            "no dialect registered for driver '{}' or url '{}'",
            driver_class, url
        ))
    }

    /// Create an unknown dialect error for a short name or an unregistered dialect.
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownDialect(name.into())
    }

    /// Create a malformed URL error.
    pub fn malformed(
        dialect: &'static str,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedUrl {
            dialect,
            url: url.into(),
            message: message.into(),
        }
    }

    /// Check if this is an unknown dialect error.
    pub fn is_unknown_dialect(&self) -> bool {
        matches!(self, Self::UnknownDialect(_))
    }

    /// Check if this is a malformed URL error.
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, Self::MalformedUrl { .. })
    }
}
