//! Decode and re-encode connection URLs through their owning dialect.
//!
//! ```rust
//! use connkit_dialect::{DatabaseConnectionService, Dialect};
//!
//! let service = DatabaseConnectionService::new();
//!
//! let mut conn = service
//!     .create_connection("org.gjt.mm.mysql.Driver", "jdbc:mysql://localhost:1234/testdb")
//!     .unwrap();
//! assert_eq!(conn.hostname(), Some("localhost"));
//!
//! conn.port = Some("3307".to_string());
//! conn.add_extra_option(Dialect::MySql, "useSSL", "false");
//! assert_eq!(
//!     service.encode_connection(&conn).unwrap(),
//!     "jdbc:mysql://localhost:3307/testdb?useSSL=false"
//! );
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ConfigResult, ServiceConfig};
use crate::connection::DatabaseConnection;
use crate::dialect::{Dialect, GenericGrammar};
use crate::error::DialectResult;
use crate::registry::DialectRegistry;

/// Codec entry point.
///
/// Holds a read-only registry; every call is independent and the service can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct DatabaseConnectionService {
    registry: Arc<DialectRegistry>,
    generic_fallback: bool,
}

impl Default for DatabaseConnectionService {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseConnectionService {
    /// Create a service over every built-in dialect, failing on unknown input.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(DialectRegistry::builtin().clone()))
    }

    /// Create a service over a custom registry.
    pub fn with_registry(registry: Arc<DialectRegistry>) -> Self {
        Self {
            registry,
            generic_fallback: false,
        }
    }

    /// Create a service from configuration.
    pub fn from_config(config: &ServiceConfig) -> ConfigResult<Self> {
        let registry = DialectRegistry::from_config(config)?;
        Ok(Self {
            registry: Arc::new(registry),
            generic_fallback: config.generic_fallback,
        })
    }

    /// Produce a generic connection instead of failing on unknown input.
    pub fn with_generic_fallback(mut self, enabled: bool) -> Self {
        self.generic_fallback = enabled;
        self
    }

    /// The registry this service resolves against.
    pub fn registry(&self) -> &DialectRegistry {
        &self.registry
    }

    /// Registered database types.
    pub fn database_types(&self) -> &[Dialect] {
        self.registry.dialects()
    }

    /// Decode `url` with the dialect owning the driver class / URL pair.
    ///
    /// # Errors
    ///
    /// - `UnknownDialect` when neither the driver class nor the URL prefix is
    ///   registered (unless the generic fallback is enabled).
    /// - `MalformedUrl` when the owning dialect rejects the URL.
    pub fn create_connection(
        &self,
        driver_class: &str,
        url: &str,
    ) -> DialectResult<DatabaseConnection> {
        debug!(driver_class, url_len = url.len(), "create_connection()");

        let dialect = match self.registry.resolve(driver_class, url) {
            Ok(dialect) => dialect,
            Err(err) if err.is_unknown_dialect() && self.generic_fallback_enabled() => {
                warn!(driver_class, "No dialect matched, using generic connection");
                return Ok(self.create_generic_connection(driver_class, url));
            }
            Err(err) => return Err(err),
        };

        if dialect == Dialect::Generic {
            return Ok(self.create_generic_connection(driver_class, url));
        }
        dialect.decode(url)
    }

    /// Build a generic connection that keeps driver class and URL verbatim.
    pub fn create_generic_connection(&self, driver_class: &str, url: &str) -> DatabaseConnection {
        GenericGrammar::connection(driver_class, url)
    }

    /// Render the connection's canonical URL including extra options.
    ///
    /// The owning dialect is taken from the connection itself, never
    /// re-sniffed. Fails with `UnknownDialect` when that dialect is not
    /// registered with this service.
    pub fn encode_connection(&self, conn: &DatabaseConnection) -> DialectResult<String> {
        self.dialect_for(conn)?.encode(conn)
    }

    /// Render the connection's canonical URL without extra options.
    pub fn base_url(&self, conn: &DatabaseConnection) -> DialectResult<String> {
        self.dialect_for(conn)?.encode_base(conn)
    }

    /// The registered dialect owning `conn`.
    pub fn dialect_for(&self, conn: &DatabaseConnection) -> DialectResult<Dialect> {
        self.registry.get(conn.dialect)
    }

    fn generic_fallback_enabled(&self) -> bool {
        self.generic_fallback && self.registry.contains(Dialect::Generic)
    }
}
