//! Regeneration jobs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;
use super::status::StatusResponse;

/// The regeneration jobs the backend can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    /// Rebuild the M3U playlist (downloads logos when configured).
    M3u,
    /// Rebuild the XMLTV programme guide.
    Epg,
    /// Logo download; the backend acknowledges it without doing work, since
    /// logos are fetched during the `m3u` job.
    Logos,
}

impl JobKind {
    pub const ALL: [JobKind; 3] = [JobKind::M3u, JobKind::Epg, JobKind::Logos];

    /// Path segment used in `/jobs/{kind}`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M3u => "m3u",
            Self::Epg => "epg",
            Self::Logos => "logos",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m3u" => Ok(Self::M3u),
            "epg" => Ok(Self::Epg),
            "logos" => Ok(Self::Logos),
            _ => Err(UnknownVariant::new("job", s, &["m3u", "epg", "logos"])),
        }
    }
}

/// Acknowledgment of a job trigger.
///
/// `ok == false` with an `error` is a normal 200 response (unknown job,
/// missing script); it is not mapped to an [`ApiError`](crate::ApiError).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    pub ok: bool,
    pub status: StatusResponse,
    #[serde(default)]
    pub error: Option<String>,
    /// Download location of the generated file, when the job produced one.
    #[serde(default)]
    pub download_url: Option<String>,
}
