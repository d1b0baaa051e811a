#![deny(unsafe_code)]

//! Shared test utilities for the IPTV relay workspace.
//!
//! Provides a recording mock of the relay backend, config builders, and
//! tracing helpers so that individual crate tests stay concise and
//! consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! iptv-relay-test-utils = { workspace = true }
//! ```

pub mod backend;
pub mod config;
pub mod tracing_setup;

pub use backend::{CannedResponse, MockBackend, RecordedRequest, unreachable_base_url};
pub use config::{TestConfigBuilder, TestConfigFile};
