//! Ordered, dialect-scoped extra options.
//!
//! Extra options are the vendor-specific `key=value` pairs a connection URL
//! carries beyond host, port and database name. They are stored under
//! qualified keys of the form `<SHORT_NAME>.<key>` so that two dialects never
//! share a namespace on the same connection, and they keep insertion order so
//! a decoded URL renders its options back in the order they were read.
//!
//! ```rust
//! use connkit_dialect::{Dialect, ExtraOptions};
//!
//! let syntax = Dialect::MySql.option_syntax().unwrap();
//! let mut options = ExtraOptions::parse("autoCommit=true&test=FALSE", Dialect::MySql, syntax);
//! assert_eq!(options.get(Dialect::MySql, "test"), Some("FALSE"));
//!
//! options.add(Dialect::MySql, "useSSL", "false");
//! assert_eq!(
//!     options.render(Dialect::MySql, syntax),
//!     "autoCommit=true&test=FALSE&useSSL=false"
//! );
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dialect::Dialect;

/// Separator between the dialect short name and the option key.
pub const NAMESPACE_SEPARATOR: char = '.';

/// How a dialect writes options into its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionSyntax {
    /// Character introducing the first option (`?` for MySQL).
    pub indicator: char,
    /// Character separating option entries.
    pub delimiter: char,
    /// Character separating a key from its value.
    pub assign: char,
}

impl OptionSyntax {
    /// `?key=value&key=value`
    pub const QUERY: Self = Self {
        indicator: '?',
        delimiter: '&',
        assign: '=',
    };

    /// `;key=value;key=value`
    pub const SEMICOLON: Self = Self {
        indicator: ';',
        delimiter: ';',
        assign: '=',
    };
}

/// Build the qualified key `<SHORT_NAME>.<key>` for a dialect option.
pub fn qualified_key(dialect: Dialect, key: &str) -> String {
    let short = dialect.short_name();
    let mut qualified = String::with_capacity(short.len() + 1 + key.len());
    qualified.push_str(short);
    qualified.push(NAMESPACE_SEPARATOR);
    qualified.push_str(key);
    qualified
}

/// Split a raw option tail into `(key, value)` pairs.
///
/// Entries are split on the delimiter, then on the first assign character so
/// values may themselves contain it. Entries with an empty key are skipped,
/// which absorbs trailing and doubled delimiters as well as `=value` and
/// bare `=` segments. An entry without an assign character yields `None` as
/// its value. Nothing is trimmed.
pub(crate) fn pairs(raw: &str, syntax: OptionSyntax) -> impl Iterator<Item = (&str, Option<&str>)> {
    raw.split(syntax.delimiter)
        .map(move |segment| match segment.split_once(syntax.assign) {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        })
        .filter(|(key, _)| !key.is_empty())
}

/// Ordered mapping of qualified option keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraOptions {
    entries: IndexMap<String, String>,
}

impl ExtraOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw option tail, namespacing every key under `dialect`.
    ///
    /// A key that appears twice keeps its first position and its last value.
    pub fn parse(raw: &str, dialect: Dialect, syntax: OptionSyntax) -> Self {
        let mut options = Self::new();
        for (key, value) in pairs(raw, syntax) {
            trace!(dialect = dialect.short_name(), key, "Parsed extra option");
            options.add(dialect, key, value.unwrap_or_default());
        }
        options
    }

    /// Insert or overwrite an option.
    ///
    /// An existing key keeps its position; a new key is appended. Returns the
    /// previous value, if any.
    pub fn add(
        &mut self,
        dialect: Dialect,
        key: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.entries
            .insert(qualified_key(dialect, key.as_ref()), value.into())
    }

    /// Get an option value by dialect and un-prefixed key.
    pub fn get(&self, dialect: Dialect, key: &str) -> Option<&str> {
        self.get_qualified(&qualified_key(dialect, key))
    }

    /// Get an option value by its qualified `<SHORT_NAME>.<key>` key.
    pub fn get_qualified(&self, qualified: &str) -> Option<&str> {
        self.entries.get(qualified).map(String::as_str)
    }

    /// Remove an option, keeping the order of the remaining entries.
    pub fn remove(&mut self, dialect: Dialect, key: &str) -> Option<String> {
        self.entries.shift_remove(&qualified_key(dialect, key))
    }

    /// Number of options across all namespaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no options at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(qualified_key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the options of one dialect as `(key, value)`, with the
    /// namespace prefix stripped, in insertion order.
    pub fn for_dialect(&self, dialect: Dialect) -> impl Iterator<Item = (&str, &str)> {
        let short = dialect.short_name();
        self.entries.iter().filter_map(move |(qualified, value)| {
            qualified
                .strip_prefix(short)
                .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
                .map(|key| (key, value.as_str()))
        })
    }

    /// Render the options of one dialect joined by its delimiter.
    ///
    /// Entries of other namespaces and entries with an empty key are skipped.
    /// An empty value renders as the bare key. The indicator is not included; an empty string means there is
    /// nothing to append.
    pub fn render(&self, dialect: Dialect, syntax: OptionSyntax) -> String {
        let mut rendered = String::new();
        for (key, value) in self.for_dialect(dialect).filter(|(key, _)| !key.is_empty()) {
            if !rendered.is_empty() {
                rendered.push(syntax.delimiter);
            }
            rendered.push_str(key);
            if !value.is_empty() {
                rendered.push(syntax.assign);
                rendered.push_str(value);
            }
        }
        rendered
    }
}

impl<'a> IntoIterator for &'a ExtraOptions {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
