//! Status client: aggregate status and interface alias resolution.
//!
//! Interface tokens are opaque here. A token may be a literal interface
//! name (`ens192`), a role alias (`source_iface`, `local_iface`) or a
//! comma-joined mix of both; the backend resolves it. The client forwards
//! the string untouched and returns the resolved sequence exactly as
//! received: no splitting, reordering, deduplication or truncation.

use serde::Serialize;
use tracing::debug;

use crate::transport::{ApiError, Transport};
use crate::types::{
    NetworkInterfaceDetail, NetworkInterfacesDetailResponse, NetworkInterfacesResponse,
    StatusResponse, first_interface_or_empty,
};

use super::PhysicalQuery;

#[derive(Debug, Serialize)]
struct InterfaceStatusQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    interfaces: Option<&'a str>,
}

/// View over the `/status` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct StatusApi<'a> {
    transport: &'a Transport,
}

impl<'a> StatusApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Output files, last job outcome and embedded udpxy status.
    pub async fn get_status(&self) -> Result<StatusResponse, ApiError> {
        self.transport.get("/status").await
    }

    /// Resolve `token` to interface detail.
    ///
    /// `None` sends no `interfaces` parameter at all, asking the backend for
    /// its default set (both configured roles). `Some("")` is forwarded as
    /// an empty parameter; it is not treated as `None`.
    pub async fn get_interface_status(
        &self,
        token: Option<&str>,
    ) -> Result<NetworkInterfacesDetailResponse, ApiError> {
        debug!(token = ?token, "resolving interface token");
        let query = InterfaceStatusQuery { interfaces: token };
        self.transport
            .get_with_query("/status/interfaces", &query)
            .await
    }

    /// Legacy single-interface view: the first resolved interface, or the
    /// empty placeholder when nothing resolved. An empty result is not an
    /// error.
    pub async fn get_network(&self, token: Option<&str>) -> Result<NetworkInterfaceDetail, ApiError> {
        let resolved = self.get_interface_status(token).await?;
        Ok(first_interface_or_empty(resolved))
    }

    /// Interface inventory. `Some(true)` restricts it to adapters the backend
    /// identified as physical hardware; `None` sends no filter.
    pub async fn get_interfaces(
        &self,
        physical: Option<bool>,
    ) -> Result<NetworkInterfacesResponse, ApiError> {
        self.transport
            .get_with_query("/status/interfaces_list", &PhysicalQuery { physical })
            .await
    }
}
