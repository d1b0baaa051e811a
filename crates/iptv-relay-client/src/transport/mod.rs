//! Transport layer: HTTP/JSON dispatch against the relay backend.
//!
//! Every resource client goes through one [`Transport`]. It owns the base
//! path, the timeout and the error contract; resource clients only choose a
//! verb, a path and the types on either side.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐                         ┌──────────────────┐
//! │ resource clients │  typed request/response │    Transport     │
//! │ status, udpxy, … │────────────────────────▶│ (reqwest, /api/v1)│
//! └──────────────────┘                         └────────┬─────────┘
//!                                                       │ failures
//!                                              ┌────────▼─────────┐
//!                                              │  ErrorObserver   │
//!                                              └──────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod observer;

pub use client::{API_BASE_PATH, DEFAULT_TIMEOUT, Transport, TransportBuilder};
pub use error::{ApiError, ErrorBody, NETWORK_ERROR, normalize_error_response};
pub use observer::{
    ErrorObserver, FailedRequest, RecentErrors, RecentErrorsReader, RequestContext,
    TracingObserver,
};
