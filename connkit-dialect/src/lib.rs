//! # connkit-dialect
//!
//! Multi-dialect JDBC connection URL codec.
//!
//! Given a driver class name and a vendor connection URL, the
//! [`DatabaseConnectionService`] picks the owning [`Dialect`], decodes the URL
//! into a [`DatabaseConnection`] (host, port, database name, attributes and
//! extra options), and renders an edited connection back into that dialect's
//! canonical URL.
//!
//! ## Decoding
//!
//! ```rust
//! use connkit_dialect::{DatabaseConnectionService, Dialect};
//!
//! let service = DatabaseConnectionService::new();
//! let conn = service
//!     .create_connection(
//!         "com.microsoft.sqlserver.jdbc.SQLServerDriver",
//!         "jdbc:sqlserver://localhost:1234;databaseName=testdb;loginTimeout=30",
//!     )
//!     .unwrap();
//!
//! assert_eq!(conn.dialect, Dialect::MssqlNative);
//! assert_eq!(conn.hostname(), Some("localhost"));
//! assert_eq!(conn.port(), Some("1234"));
//! assert_eq!(conn.database_name(), Some("testdb"));
//! assert_eq!(conn.extra_option(Dialect::MssqlNative, "loginTimeout"), Some("30"));
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use connkit_dialect::{DatabaseConnectionService, Dialect};
//!
//! let service = DatabaseConnectionService::new();
//! let mut conn = service
//!     .create_connection("org.hsqldb.jdbcDriver", "jdbc:hsqldb:file:testdb")
//!     .unwrap();
//! conn.add_extra_option(Dialect::Hypersonic, "shutdown", "true");
//!
//! assert_eq!(
//!     service.encode_connection(&conn).unwrap(),
//!     "jdbc:hsqldb:file:testdb;shutdown=true"
//! );
//! ```
//!
//! ## Errors
//!
//! Only two errors leave the codec: [`DialectError::UnknownDialect`] and
//! [`DialectError::MalformedUrl`]. Nothing is half-decoded; a failed decode
//! returns no connection at all.

pub mod config;
pub mod connection;
pub mod dialect;
pub mod error;
pub mod logging;
pub mod options;
pub mod registry;
pub mod service;

pub use config::{ConfigError, ConfigResult, ProcessEnv, ServiceConfig, VarSource};
pub use connection::{AccessType, DatabaseConnection};
pub use dialect::generic::{ATTRIBUTE_CUSTOM_DRIVER_CLASS, ATTRIBUTE_CUSTOM_URL};
pub use dialect::mssql::ATTRIBUTE_USE_INTEGRATED_SECURITY;
pub use dialect::{
    Dialect, DialectGrammar, GenericGrammar, HypersonicGrammar, MssqlNativeGrammar, MySqlGrammar,
    OracleGrammar,
};
pub use error::{DialectError, DialectResult};
pub use options::{ExtraOptions, OptionSyntax, qualified_key};
pub use registry::{DialectRegistry, DialectRegistryBuilder};
pub use service::DatabaseConnectionService;
