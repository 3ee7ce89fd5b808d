//! Fuzz target for the service config parser.
//!
//! This target feeds arbitrary TOML strings to the config parser
//! to find crashes and panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use std::collections::HashMap;

use connkit_dialect::{DatabaseConnectionService, ServiceConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        let env = HashMap::from([("FUZZ".to_string(), "1".to_string())]);
        if let Ok(config) = ServiceConfig::from_toml_with(input, &env) {
            let _ = DatabaseConnectionService::from_config(&config);
        }
    }
});
