//! # connkit
//!
//! Decode and re-encode vendor JDBC connection URLs.
//!
//! connkit provides:
//! - Dialect grammars for MySQL, SQL Server (native driver), Oracle thin,
//!   HSQLDB and a generic passthrough
//! - Driver class and URL prefix resolution through an immutable registry
//! - Ordered, dialect-scoped extra options that survive a round trip
//! - TOML configuration with environment interpolation
//!
//! ## Quick Start
//!
//! ```rust
//! use connkit::prelude::*;
//!
//! let service = DatabaseConnectionService::new();
//! let mut conn = service
//!     .create_connection("oracle.jdbc.driver.OracleDriver", "jdbc:oracle:thin:@localhost:1521:XE")
//!     .unwrap();
//!
//! assert_eq!(conn.dialect, Dialect::Oracle);
//! assert_eq!(conn.database_name(), Some("XE"));
//!
//! conn.hostname = Some("db.internal".to_string());
//! assert_eq!(
//!     service.encode_connection(&conn).unwrap(),
//!     "jdbc:oracle:thin:@db.internal:1521:XE"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Dialect grammars, registry and codec service.
pub mod dialect {
    pub use connkit_dialect::*;
}

/// Logging setup.
pub use connkit_dialect::logging;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dialect::{
        DatabaseConnection, DatabaseConnectionService, Dialect, DialectError, DialectRegistry,
        DialectResult, ExtraOptions, ServiceConfig,
    };
}

// Re-export key types at the crate root
pub use dialect::{DatabaseConnection, DatabaseConnectionService, Dialect, DialectError};
