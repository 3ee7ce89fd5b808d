//! Service configuration loaded from `connkit.toml`.
//!
//! ```toml
//! # Produce a generic passthrough connection instead of failing when
//! # neither the driver class nor the URL prefix is recognized.
//! generic_fallback = false
//!
//! # Dialects left out of the registry.
//! disabled_dialects = ["ORACLE"]
//!
//! # Extra driver classes, mapped to dialect short names.
//! [driver_aliases]
//! "org.mariadb.jdbc.Driver" = "MYSQL"
//! "${LEGACY_DRIVER:-net.sourceforge.jtds.jdbc.Driver}" = "MSSQLNative"
//! ```
//!
//! `${VAR}` and `${VAR:-default}` are expanded before parsing. A variable
//! that is unset and has no default is left as written.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::dialect::Dialect;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "connkit.toml";

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {path}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid TOML or has unknown keys or dialect names.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The interpolation pattern failed to compile.
    #[error("invalid interpolation pattern: {0}")]
    Pattern(#[from] regex_lite::Error),

    /// A driver alias points at a dialect that is disabled.
    #[error("driver alias '{driver_class}' points at disabled dialect {dialect}")]
    DisabledAlias {
        /// Aliased driver class.
        driver_class: String,
        /// Target dialect.
        dialect: Dialect,
    },
}

/// Configuration of the connection service and its registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Fall back to a generic connection for unrecognized input.
    #[serde(default)]
    pub generic_fallback: bool,

    /// Dialects left out of the registry.
    #[serde(default)]
    pub disabled_dialects: Vec<Dialect>,

    /// Extra driver class names and the dialect they select.
    #[serde(default)]
    pub driver_aliases: IndexMap<String, Dialect>,
}

impl ServiceConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::from_toml(&content)?;
        info!(
            path = %path.display(),
            generic_fallback = config.generic_fallback,
            disabled = config.disabled_dialects.len(),
            aliases = config.driver_aliases.len(),
            "Service config loaded"
        );
        Ok(config)
    }

    /// Parse configuration from TOML, expanding variables from the process
    /// environment.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Self::from_toml_with(content, &ProcessEnv)
    }

    /// Parse configuration from TOML, expanding variables from `source`.
    pub fn from_toml_with(content: &str, source: &impl VarSource) -> ConfigResult<Self> {
        let expanded = expand_env_vars(content, source)?;
        Ok(toml::from_str(&expanded)?)
    }

    /// Whether `dialect` is enabled.
    pub fn is_enabled(&self, dialect: Dialect) -> bool {
        !self.disabled_dialects.contains(&dialect)
    }

    /// Enable the generic fallback.
    pub fn with_generic_fallback(mut self, enabled: bool) -> Self {
        self.generic_fallback = enabled;
        self
    }

    /// Disable a dialect.
    pub fn disable(mut self, dialect: Dialect) -> Self {
        if !self.disabled_dialects.contains(&dialect) {
            self.disabled_dialects.push(dialect);
        }
        self
    }

    /// Add a driver alias.
    pub fn alias(mut self, driver_class: impl Into<String>, dialect: Dialect) -> Self {
        self.driver_aliases.insert(driver_class.into(), dialect);
        self
    }
}

/// Lookup for the `${VAR}` references in a config file.
///
/// The process environment is used by [`ServiceConfig::from_toml`]; any map
/// of names to values can stand in for it.
pub trait VarSource {
    /// Value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> VarSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl VarSource for IndexMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Expand `${VAR}` and `${VAR:-default}` references.
fn expand_env_vars(content: &str, source: &impl VarSource) -> ConfigResult<String> {
    let re = regex_lite::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")?;

    let expanded = re.replace_all(content, |caps: &regex_lite::Captures<'_>| {
        let name = &caps[1];
        match (source.var(name).filter(|v| !v.is_empty()), caps.get(2)) {
            (Some(value), _) => value,
            (None, Some(default)) => default.as_str().to_string(),
            (None, None) => caps[0].to_string(),
        }
    });

    Ok(expanded.into_owned())
}
