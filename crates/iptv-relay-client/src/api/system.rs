//! System diagnostics client.

use crate::transport::{ApiError, Transport};
use crate::types::HealthCheckReport;

#[derive(Debug, Clone, Copy)]
pub struct SystemApi<'a> {
    transport: &'a Transport,
}

impl<'a> SystemApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Run the backend's network, proxy, filesystem, configuration and
    /// service checks synchronously and return the verdict.
    pub async fn health_check(&self) -> Result<HealthCheckReport, ApiError> {
        self.transport.post_empty("/system/health-check").await
    }
}
