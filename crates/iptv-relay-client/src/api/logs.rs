//! Backend log client.

use serde::Serialize;

use crate::transport::{ApiError, Transport};
use crate::types::{ClearLogsResponse, DEFAULT_LOG_LIMIT, LogsResponse};

#[derive(Debug, Serialize)]
struct LogsQuery {
    limit: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct LogsApi<'a> {
    transport: &'a Transport,
}

impl<'a> LogsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// The most recent `limit` entries ([`DEFAULT_LOG_LIMIT`] when `None`).
    /// The limit is always sent.
    pub async fn recent(&self, limit: Option<u32>) -> Result<LogsResponse, ApiError> {
        let query = LogsQuery {
            limit: limit.unwrap_or(DEFAULT_LOG_LIMIT),
        };
        self.transport.get_with_query("/logs", &query).await
    }

    pub async fn clear(&self) -> Result<ClearLogsResponse, ApiError> {
        self.transport.post_empty("/logs/clear").await
    }
}
