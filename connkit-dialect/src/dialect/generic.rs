//! Generic connections: driver class and URL kept verbatim.
//!
//! Nothing is parsed. The URL is stored under [`ATTRIBUTE_CUSTOM_URL`] and the
//! driver class under [`ATTRIBUTE_CUSTOM_DRIVER_CLASS`]. Encoding returns the
//! stored URL unchanged and never appends extra options. Decoding a bare URL
//! fails, since the driver class would be lost.

use super::{Dialect, DialectGrammar};
use crate::connection::DatabaseConnection;
use crate::error::{DialectError, DialectResult};

/// Attribute holding the verbatim connection URL.
pub const ATTRIBUTE_CUSTOM_URL: &str = "CUSTOM_URL";

/// Attribute holding the verbatim driver class name.
pub const ATTRIBUTE_CUSTOM_DRIVER_CLASS: &str = "CUSTOM_DRIVER_CLASS";

/// Generic passthrough grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericGrammar;

impl GenericGrammar {
    /// Build a generic connection from a driver class and URL.
    pub fn connection(driver_class: &str, url: &str) -> DatabaseConnection {
        DatabaseConnection::new(Self::DIALECT)
            .with_attribute(ATTRIBUTE_CUSTOM_DRIVER_CLASS, driver_class)
            .with_attribute(ATTRIBUTE_CUSTOM_URL, url)
    }
}

impl DialectGrammar for GenericGrammar {
    const DIALECT: Dialect = Dialect::Generic;

    /// Generic URLs are opaque and never claimed by sniffing.
    fn matches_url(_url: &str) -> bool {
        false
    }

    /// A URL alone cannot describe a generic connection; build one with
    /// [`GenericGrammar::connection`] or
    /// [`DatabaseConnectionService::create_generic_connection`](crate::DatabaseConnectionService::create_generic_connection).
    fn decode(url: &str) -> DialectResult<DatabaseConnection> {
        Err(DialectError::malformed(
            Self::DIALECT.short_name(),
            url,
            "generic connections need a driver class",
        ))
    }

    fn encode_base(conn: &DatabaseConnection) -> DialectResult<String> {
        conn.attribute(ATTRIBUTE_CUSTOM_URL)
            .map(str::to_string)
            .ok_or_else(|| {
                DialectError::malformed(
                    Self::DIALECT.short_name(),
                    "",
                    format!("missing '{}' attribute", ATTRIBUTE_CUSTOM_URL),
                )
            })
    }
}
