//! Server-side pipeline configuration.
//!
//! The backend record is flat with a fixed set of known keys, but it may
//! carry keys this client does not know about. Those are preserved in the
//! `extra` side map rather than dropped, so a read-modify-write through
//! [`RelayConfigUpdate`] never loses them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::udpxy::{UdpxyConfig, UdpxyConfigUpdate};

/// Playback (catchup) proxy target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchupConfig {
    pub target_host: String,
    pub target_port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_domain: Option<String>,
}

/// Partial update of [`CatchupConfig`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchupConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_domain: Option<String>,
}

/// The full configuration record as returned by `GET /config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Upstream channel list URL.
    pub input_url: String,
    /// Interface receiving the multicast source.
    pub source_iface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_iface: Option<String>,
    /// Path of the generated playlist.
    pub output_m3u: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_udpxy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udpxy_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_tvg_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_logos: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localize_logos: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_skip_existing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_riddle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_time_ms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_days_forward: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_days_back: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_out: Option<String>,
    /// `interval` or `cron`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_interval_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_interval_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_cron_hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_cron_minute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udpxy: Option<UdpxyConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catchup: Option<CatchupConfig>,
    /// Keys not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Partial update sent with `PUT /config`. Only set fields are transmitted;
/// the backend merges them into the stored record.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_iface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_iface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_m3u: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_udpxy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udpxy_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_tvg_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_logos: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localize_logos: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_skip_existing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_riddle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_time_ms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_days_forward: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_days_back: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epg_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_interval_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_interval_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_cron_hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_cron_minute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udpxy: Option<UdpxyConfigUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catchup: Option<CatchupConfigUpdate>,
    /// Extra keys to send alongside the known ones.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RelayConfigUpdate {
    /// Whether the update would transmit no fields at all.
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_object().map(|m| m.is_empty()))
            .unwrap_or(false)
    }
}

/// Result of `PUT /config`: the merged record after the update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateConfigResponse {
    pub ok: bool,
    pub config: RelayConfig,
}
