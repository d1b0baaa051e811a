//! Aggregate service status.

use serde::{Deserialize, Serialize};

use super::udpxy::UdpxyStatus;

/// Presence, size and modification time of a generated output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStatus {
    pub exists: bool,
    /// Size in bytes.
    pub size: u64,
    /// Modification time, Unix seconds.
    pub mtime: i64,
    /// Where the file can be downloaded, when it exists.
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Status of the playlist/EPG pipeline and the proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub m3u: FileStatus,
    pub epg: FileStatus,
    /// Kind of the last job run (`m3u`, `epg`, `logos`).
    #[serde(default)]
    pub last_job: Option<String>,
    /// Exit code of the last job: 0 success, -1 timeout or crash.
    #[serde(default)]
    pub last_job_rc: Option<i32>,
    /// When the last job ran, Unix seconds.
    #[serde(default)]
    pub last_job_at: Option<i64>,
    #[serde(default)]
    pub udpxy: Option<UdpxyStatus>,
}

impl StatusResponse {
    /// Whether a job has run and exited with code 0.
    pub fn last_job_succeeded(&self) -> bool {
        self.last_job_rc == Some(0)
    }
}
