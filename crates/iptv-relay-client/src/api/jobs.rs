//! Job trigger client.

use tracing::info;

use crate::transport::{ApiError, Transport};
use crate::types::{JobKind, JobResponse};

#[derive(Debug, Clone, Copy)]
pub struct JobsApi<'a> {
    transport: &'a Transport,
}

impl<'a> JobsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Trigger `kind` with a bodyless `POST /jobs/{kind}`.
    ///
    /// Resolves with the backend's acknowledgment. The response carries a
    /// status snapshot, not a completion handle; poll
    /// [`StatusApi::get_status`](super::StatusApi::get_status) to follow up.
    pub async fn run(&self, kind: JobKind) -> Result<JobResponse, ApiError> {
        info!(job = %kind, "triggering job");
        self.transport.post_empty(&format!("/jobs/{kind}")).await
    }
}
