//! Fuzz target for URL decoding.
//!
//! Feeds arbitrary strings to every URL grammar. Decoding must never panic,
//! and anything that decodes must encode and decode again to the same
//! connection.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_decode
//! ```

#![no_main]

use connkit_dialect::{DatabaseConnectionService, Dialect};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(url) = std::str::from_utf8(data) else {
        return;
    };

    for dialect in Dialect::ALL.into_iter().filter(|d| *d != Dialect::Generic) {
        let Ok(conn) = dialect.decode(url) else {
            continue;
        };
        let encoded = dialect
            .encode(&conn)
            .unwrap_or_else(|e| panic!("{dialect} decoded {url:?} but failed to encode: {e}"));
        let again = dialect
            .decode(&encoded)
            .unwrap_or_else(|e| panic!("{dialect} rejected its own url {encoded:?}: {e}"));
        assert_eq!(again, conn, "{dialect} round trip of {url:?} via {encoded:?}");
    }

    // Generic connections come back verbatim.
    let service = DatabaseConnectionService::new().with_generic_fallback(true);
    if let Ok(conn) = service.create_connection("fuzz.Driver", url) {
        if conn.dialect == Dialect::Generic {
            assert_eq!(service.encode_connection(&conn).ok().as_deref(), Some(url));
        }
    }
});
