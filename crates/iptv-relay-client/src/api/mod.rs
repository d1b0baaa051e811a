//! Resource clients, one borrowed view per backend resource.
//!
//! [`RelayClient`] owns the [`Transport`]; each accessor hands out a
//! stateless view that maps typed requests to a verb and path. None of the
//! views hold state of their own, so any number of them can be used from
//! concurrent tasks.
//!
//! ```no_run
//! # async fn demo() -> Result<(), iptv_relay_client::ApiError> {
//! use iptv_relay_client::RelayClient;
//!
//! let client = RelayClient::new("http://192.168.1.241:8088")?;
//! let primary = client.status().get_network(Some("source_iface")).await?;
//! println!("{} has ip {:?}", primary.name, primary.ip);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod cron;
pub mod interfaces;
pub mod jobs;
pub mod logs;
pub mod status;
pub mod system;
pub mod udpxy;

use serde::Serialize;

use crate::transport::{ApiError, Transport};

pub use config::ConfigApi;
pub use cron::CronApi;
pub use interfaces::InterfacesApi;
pub use jobs::JobsApi;
pub use logs::LogsApi;
pub use status::StatusApi;
pub use system::SystemApi;
pub use udpxy::UdpxyApi;

/// Typed client for the relay control-plane API.
#[derive(Debug, Clone)]
pub struct RelayClient {
    transport: Transport,
}

impl RelayClient {
    /// Client for the server at `base_url` with the default timeout and
    /// tracing-based error reporting.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self::from_transport(Transport::builder(base_url).build()?))
    }

    /// Client over an already configured transport.
    pub fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Service status and alias-resolved interface detail.
    pub fn status(&self) -> StatusApi<'_> {
        StatusApi::new(&self.transport)
    }

    /// Interface inventory and by-name detail.
    pub fn interfaces(&self) -> InterfacesApi<'_> {
        InterfacesApi::new(&self.transport)
    }

    pub fn config(&self) -> ConfigApi<'_> {
        ConfigApi::new(&self.transport)
    }

    pub fn cron(&self) -> CronApi<'_> {
        CronApi::new(&self.transport)
    }

    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi::new(&self.transport)
    }

    pub fn logs(&self) -> LogsApi<'_> {
        LogsApi::new(&self.transport)
    }

    pub fn udpxy(&self) -> UdpxyApi<'_> {
        UdpxyApi::new(&self.transport)
    }

    pub fn system(&self) -> SystemApi<'_> {
        SystemApi::new(&self.transport)
    }
}

/// `?physical=` filter. Left out of the URL entirely when `None`, which the
/// backend treats differently from an explicit `false`.
#[derive(Debug, Serialize)]
pub(crate) struct PhysicalQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) physical: Option<bool>,
}
