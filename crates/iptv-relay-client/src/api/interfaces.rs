//! Interface client: the `/interfaces` route family.
//!
//! Same data as the status client's interface operations, but the
//! resolution token travels in the path instead of the query string.

use crate::transport::{ApiError, Transport};
use crate::types::{NetworkInterfacesDetailResponse, NetworkInterfacesResponse};

use super::PhysicalQuery;

#[derive(Debug, Clone, Copy)]
pub struct InterfacesApi<'a> {
    transport: &'a Transport,
}

impl<'a> InterfacesApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Interface inventory, optionally filtered to physical adapters.
    pub async fn list(&self, physical: Option<bool>) -> Result<NetworkInterfacesResponse, ApiError> {
        self.transport
            .get_with_query("/interfaces", &PhysicalQuery { physical })
            .await
    }

    /// Detail for `name`, which may be a literal name, a role alias, or a
    /// comma-joined list of both. Pasted into the path verbatim.
    pub async fn get(&self, name: &str) -> Result<NetworkInterfacesDetailResponse, ApiError> {
        self.transport.get(&format!("/interfaces/{name}")).await
    }
}
