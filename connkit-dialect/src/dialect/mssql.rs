//! Microsoft SQL Server connection URLs for the native Microsoft driver.
//!
//! ```text
//! jdbc:sqlserver://host:port;databaseName=name;integratedSecurity=false;k=v
//! ```
//!
//! `databaseName` is read into the database name and `integratedSecurity`
//! into [`ATTRIBUTE_USE_INTEGRATED_SECURITY`] (`false` when absent); every
//! other entry becomes an extra option. A bare authority token is the host,
//! never the database. When the authority is empty, a leading entry without
//! `=` is taken as the database name.

use super::authority::{join_host_port, non_empty, split_host_port};
use super::{Dialect, DialectGrammar, strip_scheme};
use crate::connection::DatabaseConnection;
use crate::error::DialectResult;
use crate::options::{OptionSyntax, pairs};

/// URL prefix of the SQL Server driver.
pub const URL_PREFIX: &str = "jdbc:sqlserver://";

const SNIFF_PREFIX: &str = "jdbc:sqlserver:";

/// Known SQL Server driver classes.
pub const DRIVER_CLASSES: &[&str] = &["com.microsoft.sqlserver.jdbc.SQLServerDriver"];

/// Attribute holding the raw `integratedSecurity` flag.
pub const ATTRIBUTE_USE_INTEGRATED_SECURITY: &str = "MSSQLUseIntegratedSecurity";

const KEY_DATABASE_NAME: &str = "databaseName";
const KEY_INTEGRATED_SECURITY: &str = "integratedSecurity";
const INTEGRATED_SECURITY_DEFAULT: &str = "false";

/// SQL Server (native driver) grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlNativeGrammar;

impl DialectGrammar for MssqlNativeGrammar {
    const DIALECT: Dialect = Dialect::MssqlNative;

    fn matches_url(url: &str) -> bool {
        url.starts_with(SNIFF_PREFIX)
    }

    fn decode(url: &str) -> DialectResult<DatabaseConnection> {
        let syntax = OptionSyntax::SEMICOLON;
        let rest = strip_scheme(Self::DIALECT, url, URL_PREFIX)?;
        let (authority, tail) = rest.split_once(syntax.delimiter).unwrap_or((rest, ""));
        let (hostname, port) = split_host_port(authority);

        let mut conn = DatabaseConnection::new(Self::DIALECT);
        let mut first = authority.is_empty();

        for (key, value) in pairs(tail, syntax) {
            match value {
                None if first => conn.database_name = non_empty(key),
                _ if key.eq_ignore_ascii_case(KEY_DATABASE_NAME) => {
                    conn.database_name = value.and_then(non_empty);
                }
                _ if key.eq_ignore_ascii_case(KEY_INTEGRATED_SECURITY) => {
                    conn.attributes.insert(
                        ATTRIBUTE_USE_INTEGRATED_SECURITY.to_string(),
                        value.unwrap_or_default().to_string(),
                    );
                }
                _ => {
                    conn.add_extra_option(Self::DIALECT, key, value.unwrap_or_default());
                }
            }
            first = false;
        }

        conn.attributes
            .entry(ATTRIBUTE_USE_INTEGRATED_SECURITY.to_string())
            .or_insert_with(|| INTEGRATED_SECURITY_DEFAULT.to_string());
        conn.hostname = hostname;
        conn.port = port;
        Ok(conn)
    }

    fn encode_base(conn: &DatabaseConnection) -> DialectResult<String> {
        let mut url = String::from(URL_PREFIX);
        url.push_str(&join_host_port(conn.hostname(), conn.port()));

        if let Some(name) = conn.database_name().filter(|n| !n.is_empty()) {
            url.push(';');
            url.push_str(KEY_DATABASE_NAME);
            url.push('=');
            url.push_str(name);
        }

        url.push(';');
        url.push_str(KEY_INTEGRATED_SECURITY);
        url.push('=');
        url.push_str(
            conn.attribute(ATTRIBUTE_USE_INTEGRATED_SECURITY)
                .unwrap_or(INTEGRATED_SECURITY_DEFAULT),
        );
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_full() {
        let conn = MssqlNativeGrammar::decode(
            "jdbc:sqlserver://localhost:1234;databaseName=testdb;integratedSecurity=false",
        )
        .unwrap();
        assert_eq!(conn.hostname(), Some("localhost"));
        assert_eq!(conn.port(), Some("1234"));
        assert_eq!(conn.database_name(), Some("testdb"));
        assert_eq!(conn.attribute(ATTRIBUTE_USE_INTEGRATED_SECURITY), Some("false"));
        assert!(conn.extra_options().is_empty());
    }

    #[test]
    fn test_decode_host_without_port() {
        let conn =
            MssqlNativeGrammar::decode("jdbc:sqlserver://localhost;databaseName=testdb").unwrap();
        assert_eq!(conn.hostname(), Some("localhost"));
        assert_eq!(conn.port(), None);
        assert_eq!(conn.database_name(), Some("testdb"));
        assert_eq!(conn.attribute(ATTRIBUTE_USE_INTEGRATED_SECURITY), Some("false"));
    }

    #[test]
    fn test_decode_bare_authority_is_host() {
        let conn = MssqlNativeGrammar::decode("jdbc:sqlserver://testdb").unwrap();
        assert_eq!(conn.hostname(), Some("testdb"));
        assert_eq!(conn.port(), None);
        assert_eq!(conn.database_name(), None);
    }

    #[test]
    fn test_decode_leading_name_without_authority() {
        let conn = MssqlNativeGrammar::decode("jdbc:sqlserver://;testdb;loginTimeout=5").unwrap();
        assert_eq!(conn.hostname(), None);
        assert_eq!(conn.database_name(), Some("testdb"));
        assert_eq!(conn.extra_option(Dialect::MssqlNative, "loginTimeout"), Some("5"));
    }

    #[test]
    fn test_decode_extra_options() {
        let conn = MssqlNativeGrammar::decode(
            "jdbc:sqlserver://localhost:1234;databaseName=testdb;autoCommit=true;test=FALSE",
        )
        .unwrap();
        assert_eq!(conn.extra_options().len(), 2);
        assert_eq!(conn.extra_options().get_qualified("MSSQLNative.autoCommit"), Some("true"));
        assert_eq!(conn.extra_options().get_qualified("MSSQLNative.test"), Some("FALSE"));
    }

    #[test]
    fn test_reserved_keys_case_insensitive() {
        let conn = MssqlNativeGrammar::decode(
            "jdbc:sqlserver://h;DATABASENAME=db;IntegratedSecurity=true",
        )
        .unwrap();
        assert_eq!(conn.database_name(), Some("db"));
        assert_eq!(conn.attribute(ATTRIBUTE_USE_INTEGRATED_SECURITY), Some("true"));
        assert!(conn.extra_options().is_empty());
    }

    #[test]
    fn test_decode_bad_scheme() {
        let err = MssqlNativeGrammar::decode("jasddbc:mysql://testdb").unwrap_err();
        assert!(err.is_malformed_url());
    }

    #[test]
    fn test_encode_always_writes_integrated_security() {
        let conn = DatabaseConnection::new(Dialect::MssqlNative)
            .with_hostname("localhost")
            .with_database_name("testdb");
        assert_eq!(
            MssqlNativeGrammar::encode_base(&conn).unwrap(),
            "jdbc:sqlserver://localhost;databaseName=testdb;integratedSecurity=false"
        );

        let conn = conn.with_attribute(ATTRIBUTE_USE_INTEGRATED_SECURITY, "true");
        assert_eq!(
            MssqlNativeGrammar::encode_base(&conn).unwrap(),
            "jdbc:sqlserver://localhost;databaseName=testdb;integratedSecurity=true"
        );
    }

    #[test]
    fn test_encode_with_options() {
        let conn = MssqlNativeGrammar::decode(
            "jdbc:sqlserver://localhost:1234;databaseName=testdb;autoCommit=true;test=FALSE",
        )
        .unwrap();
        assert_eq!(
            Dialect::MssqlNative.encode(&conn).unwrap(),
            "jdbc:sqlserver://localhost:1234;databaseName=testdb;integratedSecurity=false;autoCommit=true;test=FALSE"
        );
    }

    #[test]
    fn test_name_only_round_trip() {
        let conn = DatabaseConnection::new(Dialect::MssqlNative).with_database_name("testdb");
        let url = MssqlNativeGrammar::encode_base(&conn).unwrap();
        assert_eq!(url, "jdbc:sqlserver://;databaseName=testdb;integratedSecurity=false");
        let back = MssqlNativeGrammar::decode(&url).unwrap();
        assert_eq!(back.hostname(), None);
        assert_eq!(back.database_name(), Some("testdb"));
        assert_eq!(back, conn.with_attribute(ATTRIBUTE_USE_INTEGRATED_SECURITY, "false"));
    }
}
