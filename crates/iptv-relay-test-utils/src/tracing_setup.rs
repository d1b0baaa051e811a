//! Tracing initialisation helpers for tests.
//!
//! Call [`init_test_tracing`] at the top of any test that wants the
//! client's request/response events captured by the test harness.
//!
//! The subscriber is initialised at most once per process, so it is safe
//! to call from every test function.

use tracing_subscriber::EnvFilter;

/// Initialise a tracing subscriber that writes to the test-harness writer
/// and respects the `RUST_LOG` environment variable (default `debug` for
/// the relay crates, `warn` for everything else).
///
/// Subsequent calls are silently ignored.
///
/// # Example
///
/// ```ignore
/// #[tokio::test]
/// async fn my_test() {
///     iptv_relay_test_utils::tracing_setup::init_test_tracing();
///     tracing::debug!("visible in test output");
/// }
/// ```
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,iptv_relay_client=debug")),
        )
        .with_test_writer()
        .try_init();
}
