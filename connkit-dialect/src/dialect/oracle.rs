//! Oracle thin driver connection URLs.
//!
//! The part after `@` is split on `:`:
//!
//! | fields | meaning |
//! |---|---|
//! | `host:port:name` | host, port, database |
//! | `host:x` | host and port; `x` lands in the port even when it reads like a SID |
//! | `name` | database only |
//!
//! The two-field mapping is kept as existing callers read it. Oracle URLs
//! carry no extra options.

use super::authority::non_empty;
use super::{Dialect, DialectGrammar, strip_scheme};
use crate::connection::DatabaseConnection;
use crate::error::{DialectError, DialectResult};

/// URL prefix of the thin driver.
pub const URL_PREFIX: &str = "jdbc:oracle:thin:@";

const SNIFF_PREFIX: &str = "jdbc:oracle:";

/// Known Oracle driver classes.
pub const DRIVER_CLASSES: &[&str] = &["oracle.jdbc.driver.OracleDriver", "oracle.jdbc.OracleDriver"];

/// Oracle thin grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleGrammar;

impl DialectGrammar for OracleGrammar {
    const DIALECT: Dialect = Dialect::Oracle;

    fn matches_url(url: &str) -> bool {
        url.starts_with(SNIFF_PREFIX)
    }

    fn decode(url: &str) -> DialectResult<DatabaseConnection> {
        let rest = strip_scheme(Self::DIALECT, url, URL_PREFIX)?;
        let fields: Vec<&str> = rest.split(':').collect();

        let mut conn = DatabaseConnection::new(Self::DIALECT);
        match fields.as_slice() {
            [host, port, name] => {
                conn.hostname = non_empty(host);
                conn.port = non_empty(port);
                conn.database_name = non_empty(name);
            }
            [host, port] => {
                conn.hostname = non_empty(host);
                conn.port = non_empty(port);
            }
            [name] => {
                conn.database_name = non_empty(name);
            }
            _ => {
                return Err(DialectError::malformed(
                    Self::DIALECT.short_name(),
                    url,
                    format!("expected at most 3 ':'-separated fields, found {}", fields.len()),
                ));
            }
        }
        Ok(conn)
    }

    fn encode_base(conn: &DatabaseConnection) -> DialectResult<String> {
        let host = conn.hostname().unwrap_or_default();
        let port = conn.port().unwrap_or_default();
        let name = conn.database_name().unwrap_or_default();

        let target = match (host.is_empty(), port.is_empty(), name.is_empty()) {
            (true, true, _) => name.to_string(),
            (_, _, true) => format!("{}:{}", host, port),
            _ => format!("{}:{}:{}", host, port, name),
        };
        Ok(format!("{}{}", URL_PREFIX, target))
    }
}
