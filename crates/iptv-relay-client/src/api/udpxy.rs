//! udpxy proxy client.

use crate::transport::{ApiError, Transport};
use crate::types::{
    UdpxyAction, UdpxyActionRequest, UdpxyActionResponse, UdpxyConfig, UdpxyConfigUpdate,
    UdpxyConfigUpdateResponse, UdpxyStatus,
};

#[derive(Debug, Clone, Copy)]
pub struct UdpxyApi<'a> {
    transport: &'a Transport,
}

impl<'a> UdpxyApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn status(&self) -> Result<UdpxyStatus, ApiError> {
        self.transport.get("/udpxy").await
    }

    /// Run a lifecycle action and report the state observed right after it.
    pub async fn action(&self, action: UdpxyAction) -> Result<UdpxyActionResponse, ApiError> {
        self.transport
            .post_json("/udpxy/actions", &UdpxyActionRequest { action })
            .await
    }

    pub async fn start(&self) -> Result<UdpxyActionResponse, ApiError> {
        self.action(UdpxyAction::Start).await
    }

    pub async fn stop(&self) -> Result<UdpxyActionResponse, ApiError> {
        self.action(UdpxyAction::Stop).await
    }

    pub async fn restart(&self) -> Result<UdpxyActionResponse, ApiError> {
        self.action(UdpxyAction::Restart).await
    }

    pub async fn get_config(&self) -> Result<UdpxyConfig, ApiError> {
        self.transport.get("/udpxy/config").await
    }

    /// Replace the given fields of the proxy configuration. Takes effect on
    /// the next restart.
    pub async fn update_config(
        &self,
        update: &UdpxyConfigUpdate,
    ) -> Result<UdpxyConfigUpdateResponse, ApiError> {
        self.transport.put_json("/udpxy/config", update).await
    }
}
