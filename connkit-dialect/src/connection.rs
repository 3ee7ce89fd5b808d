//! The dialect-agnostic connection description.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::options::ExtraOptions;

/// How a connection reaches the database.
///
/// Only URL-based native JDBC access is described by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessType {
    /// Native JDBC driver addressed by a connection URL.
    #[default]
    Native,
}

/// A decoded connection URL.
///
/// Produced fresh by every decode; the caller owns it and may edit any field
/// before asking the owning dialect to encode it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConnection {
    /// Dialect that owns this connection.
    pub dialect: Dialect,
    /// Access type (always native).
    #[serde(default)]
    pub access_type: AccessType,
    /// Host, when the URL has a separable host segment.
    pub hostname: Option<String>,
    /// Port text as written in the URL.
    pub port: Option<String>,
    /// Database name, file path or bare identifier.
    pub database_name: Option<String>,
    /// Dialect-defined attributes the grammar recognizes specially.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Vendor-specific extra options.
    #[serde(default)]
    pub extra_options: ExtraOptions,
}

impl DatabaseConnection {
    /// Create an empty connection owned by `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            access_type: AccessType::Native,
            hostname: None,
            port: None,
            database_name: None,
            attributes: IndexMap::new(),
            extra_options: ExtraOptions::new(),
        }
    }

    /// Set the hostname.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the database name.
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get the hostname.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Get the port text.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Get the port, falling back to the dialect's default port.
    pub fn port_or_default(&self) -> Option<String> {
        self.port
            .clone()
            .or_else(|| self.dialect.default_port().map(|p| p.to_string()))
    }

    /// Get the database name.
    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    /// Get an attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Add or overwrite an extra option in `dialect`'s namespace.
    pub fn add_extra_option(
        &mut self,
        dialect: Dialect,
        key: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.extra_options.add(dialect, key, value)
    }

    /// Get an extra option by dialect and un-prefixed key.
    pub fn extra_option(&self, dialect: Dialect, key: &str) -> Option<&str> {
        self.extra_options.get(dialect, key)
    }

    /// Remove an extra option.
    pub fn remove_extra_option(&mut self, dialect: Dialect, key: &str) -> Option<String> {
        self.extra_options.remove(dialect, key)
    }

    /// Get all extra options.
    pub fn extra_options(&self) -> &ExtraOptions {
        &self.extra_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_connection_is_native_and_empty() {
        let conn = DatabaseConnection::new(Dialect::Oracle);
        assert_eq!(conn.access_type, AccessType::Native);
        assert_eq!(conn.hostname(), None);
        assert_eq!(conn.port(), None);
        assert_eq!(conn.database_name(), None);
        assert!(conn.attributes.is_empty());
        assert!(conn.extra_options().is_empty());
    }

    #[test]
    fn test_builder_setters() {
        let conn = DatabaseConnection::new(Dialect::MySql)
            .with_hostname("db")
            .with_port("3307")
            .with_database_name("shop")
            .with_attribute("k", "v");
        assert_eq!(conn.hostname(), Some("db"));
        assert_eq!(conn.port(), Some("3307"));
        assert_eq!(conn.database_name(), Some("shop"));
        assert_eq!(conn.attribute("k"), Some("v"));
    }

    #[test]
    fn test_port_or_default() {
        let conn = DatabaseConnection::new(Dialect::MySql);
        assert_eq!(conn.port_or_default().as_deref(), Some("3306"));
        let conn = conn.with_port("1234");
        assert_eq!(conn.port_or_default().as_deref(), Some("1234"));
        assert_eq!(DatabaseConnection::new(Dialect::Generic).port_or_default(), None);
    }

    #[test]
    fn test_extra_option_helpers() {
        let mut conn = DatabaseConnection::new(Dialect::MySql);
        assert_eq!(conn.add_extra_option(Dialect::MySql, "useSSL", "true"), None);
        assert_eq!(conn.extra_option(Dialect::MySql, "useSSL"), Some("true"));
        assert_eq!(
            conn.extra_options().get_qualified("MYSQL.useSSL"),
            Some("true")
        );
        assert_eq!(
            conn.remove_extra_option(Dialect::MySql, "useSSL").as_deref(),
            Some("true")
        );
        assert!(conn.extra_options().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut conn = DatabaseConnection::new(Dialect::MssqlNative)
            .with_hostname("localhost")
            .with_database_name("testdb");
        conn.add_extra_option(Dialect::MssqlNative, "test", "FALSE");

        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["dialect"], "MSSQLNative");
        assert_eq!(json["access_type"], "NATIVE");
        assert_eq!(json["extra_options"]["MSSQLNative.test"], "FALSE");

        let back: DatabaseConnection = serde_json::from_value(json).unwrap();
        assert_eq!(back, conn);
    }
}
