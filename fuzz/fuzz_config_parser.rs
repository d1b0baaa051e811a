//! Fuzz target for the client configuration parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_config_parser
//!
//! Feeds arbitrary text to `ClientConfig::parse()`. Parsing and validation
//! may reject anything, but must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = iptv_relay_config::ClientConfig::parse(s) {
            // Anything that parses has passed validation
            assert!(config.server.timeout_ms > 0);
            let _ = config.timeout();
        }
    }
});
