//! Structured logging controlled by environment variables.
//!
//! # Environment Variables
//!
//! - `CONNKIT_DEBUG=true|1|yes` - Enable debug logging
//! - `CONNKIT_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `CONNKIT_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! Installing a subscriber needs the `tracing-subscriber` feature. Without it
//! the codec still emits `tracing` events and the application is expected to
//! install its own subscriber.
//!
//! ```rust,no_run
//! use connkit_dialect::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const ENV_DEBUG: &str = "CONNKIT_DEBUG";
const ENV_LOG_LEVEL: &str = "CONNKIT_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "CONNKIT_LOG_FORMAT";

/// Check if debug logging is enabled via `CONNKIT_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(ENV_DEBUG)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Normalize a level name, or `None` when it is not a level.
fn parse_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Get the configured log level from `CONNKIT_LOG_LEVEL`.
///
/// Defaults to "debug" if `CONNKIT_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    env::var(ENV_LOG_LEVEL)
        .ok()
        .and_then(|level| parse_level(&level))
        .unwrap_or(if is_debug_enabled() { "debug" } else { "warn" })
}

/// Get the configured log format from `CONNKIT_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var(ENV_LOG_FORMAT)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging from the environment.
///
/// Does nothing unless `CONNKIT_DEBUG` or `CONNKIT_LOG_LEVEL` is set.
/// Subsequent calls are no-ops.
pub fn init() {
    if !is_debug_enabled() && env::var(ENV_LOG_LEVEL).is_err() {
        return;
    }
    install(get_log_level(), get_log_format());
}

/// Initialize logging at an explicit level, ignoring the environment level.
///
/// Unknown level names fall back to "warn".
pub fn init_with_level(level: &str) {
    install(parse_level(level).unwrap_or("warn"), get_log_format());
}

fn install(level: &'static str, format: &'static str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!("connkit={},connkit_dialect={}", level, level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match format {
                "json" => registry.with(fmt::layer().json()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level, format, "connkit logging initialized");
            }
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            let _ = (level, format);
        }
    });
}
