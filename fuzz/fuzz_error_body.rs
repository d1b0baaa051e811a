//! Fuzz target for error-response normalization.
//!
//! Run with: cargo +nightly fuzz run fuzz_error_body
//!
//! Whatever an error response carries, normalization must yield a
//! non-empty message with the status attached.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u16, &[u8])| {
    let (status, body) = input;
    let err = iptv_relay_client::transport::normalize_error_response(status, body);
    assert_eq!(err.status(), Some(status));
    assert!(!err.message().is_empty());
    let _ = err.to_body();
});
