//! Structured fuzz target for encode/decode round trips.
//!
//! Builds connections from arbitrary parts, encodes them and checks the
//! decoded result encodes to the same URL.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use connkit_dialect::{DatabaseConnection, Dialect};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzConnection {
    dialect: u8,
    hostname: Option<String>,
    port: Option<u16>,
    database_name: Option<String>,
    options: Vec<(String, String)>,
}

/// Keep generated parts free of the characters each grammar splits on.
fn clean(part: &str) -> String {
    part.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
        .collect()
}

fuzz_target!(|input: FuzzConnection| {
    let candidates = [Dialect::MySql, Dialect::MssqlNative, Dialect::Hypersonic];
    let dialect = candidates[input.dialect as usize % candidates.len()];

    let mut conn = DatabaseConnection::new(dialect);
    conn.hostname = input.hostname.as_deref().map(clean).filter(|h| !h.is_empty());
    conn.port = conn.hostname.as_ref().and(input.port).map(|p| p.to_string());
    conn.database_name = input.database_name.as_deref().map(clean).filter(|n| !n.is_empty());
    for (key, value) in &input.options {
        let key = clean(key);
        if !key.is_empty() && !key.eq_ignore_ascii_case("databaseName") && !key.eq_ignore_ascii_case("integratedSecurity") {
            conn.add_extra_option(dialect, &key, &clean(value));
        }
    }

    let Ok(url) = dialect.encode(&conn) else {
        return;
    };
    if let Ok(decoded) = dialect.decode(&url) {
        assert_eq!(dialect.encode(&decoded).ok().as_deref(), Some(url.as_str()));
    }
});
