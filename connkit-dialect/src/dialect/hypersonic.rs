//! HSQLDB connection URLs.
//!
//! ```text
//! jdbc:hsqldb:hsql://host:port/name;k=v;k=v
//! jdbc:hsqldb:file:name;k=v
//! jdbc:hsqldb:name
//! ```
//!
//! Only the `hsql://` server form has an authority. Every other form keeps
//! the remainder, including storage tokens such as `file:` or `mem:`, as the
//! database name.

use super::authority::{join_host_port, non_empty, split_authority_path, split_host_port};
use super::{Dialect, DialectGrammar, strip_scheme};
use crate::connection::DatabaseConnection;
use crate::error::DialectResult;
use crate::options::{ExtraOptions, OptionSyntax};

/// URL prefix of the HSQLDB driver.
pub const URL_PREFIX: &str = "jdbc:hsqldb:";

/// Server-mode marker following the prefix.
pub const SERVER_MARKER: &str = "hsql://";

/// Known HSQLDB driver classes.
pub const DRIVER_CLASSES: &[&str] = &["org.hsqldb.jdbcDriver", "org.hsqldb.jdbc.JDBCDriver"];

/// HSQLDB grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct HypersonicGrammar;

impl DialectGrammar for HypersonicGrammar {
    const DIALECT: Dialect = Dialect::Hypersonic;

    fn matches_url(url: &str) -> bool {
        url.starts_with(URL_PREFIX)
    }

    fn decode(url: &str) -> DialectResult<DatabaseConnection> {
        let syntax = OptionSyntax::SEMICOLON;
        let rest = strip_scheme(Self::DIALECT, url, URL_PREFIX)?;

        let mut conn = DatabaseConnection::new(Self::DIALECT);
        let tail = match rest.strip_prefix(SERVER_MARKER) {
            Some(server) => {
                let (body, tail) = server.split_once(syntax.delimiter).unwrap_or((server, ""));
                let (authority, name) = split_authority_path(body);
                let (hostname, port) = split_host_port(authority);
                conn.hostname = hostname;
                conn.port = port;
                conn.database_name = non_empty(name);
                tail
            }
            None => {
                let (name, tail) = rest.split_once(syntax.delimiter).unwrap_or((rest, ""));
                conn.database_name = non_empty(name);
                tail
            }
        };

        conn.extra_options = ExtraOptions::parse(tail, Self::DIALECT, syntax);
        Ok(conn)
    }

    fn encode_base(conn: &DatabaseConnection) -> DialectResult<String> {
        let authority = join_host_port(conn.hostname(), conn.port());
        let name = conn.database_name().unwrap_or_default();

        let mut url = String::from(URL_PREFIX);
        if !authority.is_empty() {
            url.push_str(SERVER_MARKER);
            url.push_str(&authority);
            url.push('/');
        }
        url.push_str(name);
        Ok(url)
    }
}
