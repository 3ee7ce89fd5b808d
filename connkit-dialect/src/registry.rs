//! Driver class and URL prefix lookup for dialects.
//!
//! The registry is built once and never mutated afterwards, so lookups need
//! no locking and a registry can be shared freely between threads.
//!
//! ```rust
//! use connkit_dialect::{Dialect, DialectRegistry};
//!
//! let registry = DialectRegistry::builtin();
//!
//! // A known driver class wins.
//! let dialect = registry
//!     .resolve("oracle.jdbc.driver.OracleDriver", "jdbc:oracle:thin:@testdb")
//!     .unwrap();
//! assert_eq!(dialect, Dialect::Oracle);
//!
//! // An unknown driver class falls back to the URL prefix.
//! let dialect = registry.resolve("org.mysql.Driver", "jdbc:mysql://testdb").unwrap();
//! assert_eq!(dialect, Dialect::MySql);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::config::{ConfigError, ConfigResult, ServiceConfig};
use crate::dialect::Dialect;
use crate::error::{DialectError, DialectResult};

static BUILTIN: LazyLock<DialectRegistry> = LazyLock::new(DialectRegistry::new);

/// Immutable table of registered dialects.
#[derive(Debug, Clone)]
pub struct DialectRegistry {
    dialects: Vec<Dialect>,
    drivers: HashMap<String, Dialect>,
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectRegistry {
    /// Create a registry with every dialect and its built-in driver classes.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// The shared registry with every dialect enabled.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Start building a custom registry.
    pub fn builder() -> DialectRegistryBuilder {
        DialectRegistryBuilder::new()
    }

    /// Build a registry from service configuration.
    pub fn from_config(config: &ServiceConfig) -> ConfigResult<Self> {
        let mut builder = Self::builder();
        for dialect in &config.disabled_dialects {
            builder = builder.without(*dialect);
        }
        for (driver_class, dialect) in &config.driver_aliases {
            if !config.is_enabled(*dialect) {
                return Err(ConfigError::DisabledAlias {
                    driver_class: driver_class.clone(),
                    dialect: *dialect,
                });
            }
            builder = builder.alias(driver_class.clone(), *dialect);
        }
        Ok(builder.build())
    }

    /// Registered dialects in registration order.
    pub fn dialects(&self) -> &[Dialect] {
        &self.dialects
    }

    /// Whether `dialect` is registered.
    pub fn contains(&self, dialect: Dialect) -> bool {
        self.dialects.contains(&dialect)
    }

    /// Return `dialect` if it is registered.
    pub fn get(&self, dialect: Dialect) -> DialectResult<Dialect> {
        if self.contains(dialect) {
            Ok(dialect)
        } else {
            Err(DialectError::unknown_name(format!(
                "dialect {} is not registered",
                dialect.short_name()
            )))
        }
    }

    /// Look up a registered dialect by short name.
    pub fn by_short_name(&self, name: &str) -> DialectResult<Dialect> {
        self.get(Dialect::from_short_name(name)?)
    }

    /// Look up a dialect by exact driver class name.
    pub fn by_driver_class(&self, driver_class: &str) -> Option<Dialect> {
        self.drivers.get(driver_class).copied()
    }

    /// Find the first registered dialect whose URL prefix matches.
    pub fn by_url(&self, url: &str) -> Option<Dialect> {
        self.dialects.iter().copied().find(|d| d.matches_url(url))
    }

    /// Resolve the dialect owning a driver class / URL pair.
    ///
    /// A known driver class is authoritative, even when the URL belongs to
    /// another vendor; decoding then fails with a malformed URL error. Only an
    /// unknown driver class falls back to URL prefix sniffing.
    pub fn resolve(&self, driver_class: &str, url: &str) -> DialectResult<Dialect> {
        if let Some(dialect) = self.by_driver_class(driver_class) {
            debug!(driver_class, dialect = dialect.short_name(), "Dialect resolved by driver class");
            return Ok(dialect);
        }

        match self.by_url(url) {
            Some(dialect) => {
                warn!(
                    driver_class,
                    dialect = dialect.short_name(),
                    "Unknown driver class, dialect resolved by url prefix"
                );
                Ok(dialect)
            }
            None => Err(DialectError::unknown_driver(driver_class, url)),
        }
    }
}

/// Builder for [`DialectRegistry`].
#[derive(Debug, Clone)]
pub struct DialectRegistryBuilder {
    dialects: Vec<Dialect>,
    aliases: Vec<(String, Dialect)>,
}

impl Default for DialectRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectRegistryBuilder {
    /// Start from every dialect.
    pub fn new() -> Self {
        Self {
            dialects: Dialect::ALL.to_vec(),
            aliases: Vec::new(),
        }
    }

    /// Start from no dialects at all.
    pub fn empty() -> Self {
        Self {
            dialects: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Register a dialect.
    pub fn with(mut self, dialect: Dialect) -> Self {
        if !self.dialects.contains(&dialect) {
            self.dialects.push(dialect);
        }
        self
    }

    /// Leave a dialect out.
    pub fn without(mut self, dialect: Dialect) -> Self {
        self.dialects.retain(|d| *d != dialect);
        self
    }

    /// Map an extra driver class name to a dialect.
    pub fn alias(mut self, driver_class: impl Into<String>, dialect: Dialect) -> Self {
        self.aliases.push((driver_class.into(), dialect));
        self
    }

    /// Build the immutable registry.
    ///
    /// Aliases targeting a dialect that is not registered are dropped.
    pub fn build(self) -> DialectRegistry {
        let mut drivers = HashMap::new();
        for dialect in &self.dialects {
            for class in dialect.driver_classes() {
                drivers.insert((*class).to_string(), *dialect);
            }
        }
        for (class, dialect) in self.aliases {
            if self.dialects.contains(&dialect) {
                drivers.insert(class, dialect);
            } else {
                warn!(driver_class = %class, dialect = dialect.short_name(), "Alias to unregistered dialect dropped");
            }
        }

        DialectRegistry {
            dialects: self.dialects,
            drivers,
        }
    }
}
