#![deny(unsafe_code)]

//! Typed control-plane client for the IPTV relay appliance.
//!
//! The appliance rebroadcasts multicast IPTV as HTTP through udpxy,
//! regenerates M3U and EPG outputs, and exposes its state over a JSON API
//! under `/api/v1`. This crate wraps that API: one shared [`Transport`]
//! with a uniform error contract, and a thin view per backend resource
//! hung off [`RelayClient`].
//!
//! Interface selection is by token. A token may name interfaces directly
//! (`ens192`), by role (`source_iface`, `local_iface`), or both,
//! comma-joined. Tokens travel to the backend untouched; see
//! [`InterfaceRef`] for building them.

/// Request-level resource clients.
pub mod api;
/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// HTTP dispatch, error normalization and failure reporting.
pub mod transport;
/// Wire types exchanged with the backend.
pub mod types;

pub use api::RelayClient;
pub use transport::{ApiError, ErrorBody, ErrorObserver, RecentErrors, Transport};
pub use types::{InterfaceRef, JobKind, UdpxyAction};
