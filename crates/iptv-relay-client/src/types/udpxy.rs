//! udpxy multicast-to-HTTP proxy: status, lifecycle and configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Running state of the proxy process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpxyStatus {
    pub running: bool,
    #[serde(default)]
    pub pid: Option<u32>,
    pub port: u16,
    pub bind_address: String,
    pub source_iface: String,
    pub max_connections: u32,
    #[serde(default)]
    pub connections: u32,
    /// Seconds since the process started.
    #[serde(default)]
    pub uptime: u64,
    /// Whether the udpxy binary is installed.
    pub available: bool,
}

/// Lifecycle action for the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UdpxyAction {
    Start,
    Stop,
    Restart,
}

impl UdpxyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for UdpxyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UdpxyAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "restart" => Ok(Self::Restart),
            _ => Err(UnknownVariant::new("udpxy action", s, &["start", "stop", "restart"])),
        }
    }
}

/// Body of `POST /udpxy/actions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdpxyActionRequest {
    pub action: UdpxyAction,
}

/// Outcome of a lifecycle action, with the state observed right after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpxyActionResponse {
    pub ok: bool,
    pub message: String,
    pub running: bool,
    #[serde(default)]
    pub pid: Option<u32>,
}

/// The proxy's own configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpxyConfig {
    pub enabled: bool,
    pub port: u16,
    pub bind_address: String,
    pub source_iface: String,
    pub max_connections: u32,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub pid_file: Option<String>,
}

/// Partial update of [`UdpxyConfig`]; unset fields are left unchanged.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpxyConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_iface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<String>,
}

/// Result of `PUT /udpxy/config`. Changes apply on the next restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpxyConfigUpdateResponse {
    pub ok: bool,
    pub config: UdpxyConfig,
    #[serde(default)]
    pub message: Option<String>,
}
