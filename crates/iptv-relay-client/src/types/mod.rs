//! Wire types for every relay API resource.
//!
//! These mirror the backend's JSON shapes. Optional response fields default
//! when absent; optional request fields are omitted when `None`.

pub mod config;
pub mod cron;
pub mod jobs;
pub mod logs;
pub mod network;
pub mod status;
pub mod system;
pub mod udpxy;

pub use config::*;
pub use cron::*;
pub use jobs::*;
pub use logs::*;
pub use network::*;
pub use status::*;
pub use system::*;
pub use udpxy::*;

/// A string did not name any variant of a fixed set (job kind, udpxy action).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} {value:?} (expected one of: {})", .expected.join(", "))]
pub struct UnknownVariant {
    what: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl UnknownVariant {
    pub(crate) fn new(what: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            what,
            value: value.to_string(),
            expected,
        }
    }
}
