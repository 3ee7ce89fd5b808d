//! MySQL connection URLs.
//!
//! ```text
//! jdbc:mysql://host:port/name?k=v&k=v
//! jdbc:mysql://host/name
//! jdbc:mysql://name
//! ```

use super::authority::{join_host_port, non_empty, split_authority_path, split_host_port};
use super::{Dialect, DialectGrammar, strip_scheme};
use crate::connection::DatabaseConnection;
use crate::error::DialectResult;
use crate::options::{ExtraOptions, OptionSyntax};

/// URL prefix of the MySQL driver.
pub const URL_PREFIX: &str = "jdbc:mysql://";

/// Prefix used when sniffing a URL.
const SNIFF_PREFIX: &str = "jdbc:mysql:";

/// Known MySQL driver classes.
pub const DRIVER_CLASSES: &[&str] = &[
    "org.gjt.mm.mysql.Driver",
    "com.mysql.jdbc.Driver",
    "com.mysql.cj.jdbc.Driver",
];

/// MySQL grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlGrammar;

impl DialectGrammar for MySqlGrammar {
    const DIALECT: Dialect = Dialect::MySql;

    fn matches_url(url: &str) -> bool {
        url.starts_with(SNIFF_PREFIX)
    }

    fn decode(url: &str) -> DialectResult<DatabaseConnection> {
        let rest = strip_scheme(Self::DIALECT, url, URL_PREFIX)?;
        let (body, tail) = rest.split_once(OptionSyntax::QUERY.indicator).unwrap_or((rest, ""));

        let (authority, name) = split_authority_path(body);
        let (hostname, port) = split_host_port(authority);

        let mut conn = DatabaseConnection::new(Self::DIALECT);
        conn.hostname = hostname;
        conn.port = port;
        conn.database_name = non_empty(name);
        conn.extra_options = ExtraOptions::parse(tail, Self::DIALECT, OptionSyntax::QUERY);
        Ok(conn)
    }

    fn encode_base(conn: &DatabaseConnection) -> DialectResult<String> {
        let authority = join_host_port(conn.hostname(), conn.port());
        let name = conn.database_name().unwrap_or_default();

        let mut url = String::with_capacity(URL_PREFIX.len() + authority.len() + 1 + name.len());
        url.push_str(URL_PREFIX);
        if !authority.is_empty() {
            url.push_str(&authority);
            url.push('/');
        }
        url.push_str(name);
        Ok(url)
    }
}
