//! Configuration client.

use crate::transport::{ApiError, Transport};
use crate::types::{RelayConfig, RelayConfigUpdate, UpdateConfigResponse};

#[derive(Debug, Clone, Copy)]
pub struct ConfigApi<'a> {
    transport: &'a Transport,
}

impl<'a> ConfigApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get(&self) -> Result<RelayConfig, ApiError> {
        self.transport.get("/config").await
    }

    /// Merge `update` into the stored configuration and return the result.
    pub async fn update(&self, update: &RelayConfigUpdate) -> Result<UpdateConfigResponse, ApiError> {
        self.transport.put_json("/config", update).await
    }
}
