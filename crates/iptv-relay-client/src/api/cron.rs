//! Schedule client.

use crate::transport::{ApiError, Transport};
use crate::types::{CronActionResponse, CronSetupRequest, CronStatus};

#[derive(Debug, Clone, Copy)]
pub struct CronApi<'a> {
    transport: &'a Transport,
}

impl<'a> CronApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn status(&self) -> Result<CronStatus, ApiError> {
        self.transport.get("/cron").await
    }

    /// Install (or replace) the regeneration schedule.
    pub async fn install(&self, request: &CronSetupRequest) -> Result<CronActionResponse, ApiError> {
        self.transport.post_json("/cron", request).await
    }

    pub async fn remove(&self) -> Result<CronActionResponse, ApiError> {
        self.transport.delete("/cron").await
    }
}
