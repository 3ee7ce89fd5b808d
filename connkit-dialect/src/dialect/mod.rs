//! Dialect grammars for vendor JDBC connection URLs.
//!
//! Each supported database engine writes its connection URL differently:
//!
//! ```text
//! MySQL       jdbc:mysql://[host[:port]]/name[?k=v&k=v]
//! MSSQL       jdbc:sqlserver://[host[:port]][;databaseName=name][;k=v]*
//! Oracle      jdbc:oracle:thin:@host:port:name | host:name | name
//! Hypersonic  jdbc:hsqldb:hsql://[host[:port]]/name[;k=v]* | jdbc:hsqldb:name[;k=v]*
//! Generic     any URL, stored verbatim
//! ```
//!
//! [`Dialect`] is the closed set of grammars. Each variant dispatches to a
//! unit type implementing [`DialectGrammar`]; the variant is picked once by
//! the registry and travels on the decoded [`DatabaseConnection`].
//!
//! ```rust
//! use connkit_dialect::Dialect;
//!
//! assert_eq!(Dialect::MySql.default_port(), Some(3306));
//! assert_eq!(Dialect::from_short_name("ORACLE").unwrap(), Dialect::Oracle);
//! assert!(Dialect::Hypersonic.matches_url("jdbc:hsqldb:file:testdb"));
//! ```

mod authority;
pub mod generic;
pub mod hypersonic;
pub mod mssql;
pub mod mysql;
pub mod oracle;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::connection::DatabaseConnection;
use crate::error::{DialectError, DialectResult};
use crate::options::OptionSyntax;

pub use generic::GenericGrammar;
pub use hypersonic::HypersonicGrammar;
pub use mssql::MssqlNativeGrammar;
pub use mysql::MySqlGrammar;
pub use oracle::OracleGrammar;

/// Decode and encode capability shared by every vendor grammar.
pub trait DialectGrammar {
    /// The dialect this grammar implements.
    const DIALECT: Dialect;

    /// Cheap prefix test used when sniffing an unknown driver's URL.
    fn matches_url(url: &str) -> bool;

    /// Decode a URL into a connection owned by [`Self::DIALECT`].
    fn decode(url: &str) -> DialectResult<DatabaseConnection>;

    /// Render the canonical URL without extra options.
    fn encode_base(conn: &DatabaseConnection) -> DialectResult<String>;
}

/// A supported database dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dialect {
    /// Driver class and URL passed through verbatim.
    #[serde(rename = "GENERIC")]
    Generic,
    /// MySQL / MariaDB (Connector/J).
    #[serde(rename = "MYSQL")]
    MySql,
    /// Microsoft SQL Server with the native Microsoft driver.
    #[serde(rename = "MSSQLNative")]
    MssqlNative,
    /// Oracle thin driver.
    #[serde(rename = "ORACLE")]
    Oracle,
    /// HSQLDB.
    #[serde(rename = "HYPERSONIC")]
    Hypersonic,
}

impl Dialect {
    /// Every dialect, in registration order.
    pub const ALL: [Dialect; 5] = [
        Self::Generic,
        Self::MySql,
        Self::MssqlNative,
        Self::Oracle,
        Self::Hypersonic,
    ];

    /// Stable short name, also the extra-option namespace.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Generic => "GENERIC",
            Self::MySql => "MYSQL",
            Self::MssqlNative => "MSSQLNative",
            Self::Oracle => "ORACLE",
            Self::Hypersonic => "HYPERSONIC",
        }
    }

    /// Human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Generic => "Generic database",
            Self::MySql => "MySQL",
            Self::MssqlNative => "MS SQL Server (Native)",
            Self::Oracle => "Oracle",
            Self::Hypersonic => "Hypersonic",
        }
    }

    /// Default port of the database server.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::Generic => None,
            Self::MySql => Some(3306),
            Self::MssqlNative => Some(1433),
            Self::Oracle => Some(1521),
            Self::Hypersonic => Some(9001),
        }
    }

    /// Driver class names that identify this dialect.
    pub fn driver_classes(&self) -> &'static [&'static str] {
        match self {
            Self::Generic => &[],
            Self::MySql => mysql::DRIVER_CLASSES,
            Self::MssqlNative => mssql::DRIVER_CLASSES,
            Self::Oracle => oracle::DRIVER_CLASSES,
            Self::Hypersonic => hypersonic::DRIVER_CLASSES,
        }
    }

    /// URL prefix the native driver expects.
    pub fn native_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::MySql => Some(mysql::URL_PREFIX),
            Self::MssqlNative => Some(mssql::URL_PREFIX),
            Self::Oracle => Some(oracle::URL_PREFIX),
            Self::Hypersonic => Some(hypersonic::URL_PREFIX),
        }
    }

    /// How extra options are written, or `None` when the URL carries none.
    pub fn option_syntax(&self) -> Option<OptionSyntax> {
        match self {
            Self::MySql => Some(OptionSyntax::QUERY),
            Self::MssqlNative | Self::Hypersonic => Some(OptionSyntax::SEMICOLON),
            Self::Generic | Self::Oracle => None,
        }
    }

    /// Whether extra options are rendered into the URL.
    pub fn supports_options_in_url(&self) -> bool {
        self.option_syntax().is_some()
    }

    /// Look up a dialect by short name (case-insensitive).
    pub fn from_short_name(name: &str) -> DialectResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.short_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DialectError::unknown_name(name))
    }

    /// Look up a dialect by display name.
    pub fn from_display_name(name: &str) -> DialectResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.display_name() == name)
            .ok_or_else(|| DialectError::unknown_name(name))
    }

    /// Look up the dialect whose built-in driver class table contains `class`.
    pub fn from_driver_class(class: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.driver_classes().contains(&class))
    }

    /// Cheap prefix test used when sniffing an unknown driver's URL.
    pub fn matches_url(&self, url: &str) -> bool {
        match self {
            Self::Generic => GenericGrammar::matches_url(url),
            Self::MySql => MySqlGrammar::matches_url(url),
            Self::MssqlNative => MssqlNativeGrammar::matches_url(url),
            Self::Oracle => OracleGrammar::matches_url(url),
            Self::Hypersonic => HypersonicGrammar::matches_url(url),
        }
    }

    /// Decode a URL with this dialect's grammar.
    pub fn decode(&self, url: &str) -> DialectResult<DatabaseConnection> {
        let conn = match self {
            Self::Generic => GenericGrammar::decode(url),
            Self::MySql => MySqlGrammar::decode(url),
            Self::MssqlNative => MssqlNativeGrammar::decode(url),
            Self::Oracle => OracleGrammar::decode(url),
            Self::Hypersonic => HypersonicGrammar::decode(url),
        }?;
        debug!(
            dialect = self.short_name(),
            host = ?conn.hostname,
            port = ?conn.port,
            database = ?conn.database_name,
            options = conn.extra_options.len(),
            "Connection url decoded"
        );
        Ok(conn)
    }

    /// Render the canonical URL without extra options.
    pub fn encode_base(&self, conn: &DatabaseConnection) -> DialectResult<String> {
        match self {
            Self::Generic => GenericGrammar::encode_base(conn),
            Self::MySql => MySqlGrammar::encode_base(conn),
            Self::MssqlNative => MssqlNativeGrammar::encode_base(conn),
            Self::Oracle => OracleGrammar::encode_base(conn),
            Self::Hypersonic => HypersonicGrammar::encode_base(conn),
        }
    }

    /// Render the canonical URL followed by this dialect's extra options.
    pub fn encode(&self, conn: &DatabaseConnection) -> DialectResult<String> {
        let mut url = self.encode_base(conn)?;
        if let Some(syntax) = self.option_syntax() {
            let rendered = conn.extra_options.render(*self, syntax);
            if !rendered.is_empty() {
                url.push(syntax.indicator);
                url.push_str(&rendered);
            }
        }
        debug!(dialect = self.short_name(), url_len = url.len(), "Connection url encoded");
        Ok(url)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl std::str::FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_short_name(s)
    }
}

/// Strip `prefix` from `url` or fail with a malformed URL error for `dialect`.
fn strip_scheme<'a>(dialect: Dialect, url: &'a str, prefix: &str) -> DialectResult<&'a str> {
    url.strip_prefix(prefix).ok_or_else(|| {
        DialectError::malformed(
            dialect.short_name(),
            url,
            format!("expected prefix '{}'", prefix),
        )
    })
}
