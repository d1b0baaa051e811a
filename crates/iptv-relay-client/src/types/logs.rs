//! Backend log buffer.

use serde::{Deserialize, Serialize};

/// Number of entries fetched when the caller does not choose a limit.
pub const DEFAULT_LOG_LIMIT: u32 = 200;

/// Severity of a backend log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Ok,
    Warn,
    Error,
    #[serde(other)]
    Other,
}

/// One backend log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unix seconds.
    #[serde(rename = "ts")]
    pub timestamp: i64,
    pub level: LogLevel,
    #[serde(rename = "msg")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearLogsResponse {
    pub ok: bool,
}
