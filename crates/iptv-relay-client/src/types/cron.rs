//! Scheduled regeneration (cron) types.

use serde::{Deserialize, Serialize};

/// Whether a regeneration schedule is installed, and what it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CronStatus {
    pub enabled: bool,
    #[serde(default)]
    pub cron_expr: Option<String>,
    #[serde(default)]
    pub cron_cmd: Option<String>,
    #[serde(default)]
    pub next_run_info: Option<String>,
}

/// How often the regeneration jobs run. The two modes are exclusive and
/// travel as the `mode` field of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Schedule {
    /// Run every `interval_hours` hours / `interval_minutes` minutes.
    Interval {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval_hours: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval_minutes: Option<u32>,
    },
    /// Run at explicit crontab hour/minute fields (e.g. `"3"`, `"*/6"`).
    Cron {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cron_hour: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cron_minute: Option<String>,
    },
}

impl Schedule {
    pub fn interval(hours: Option<u32>, minutes: Option<u32>) -> Self {
        Self::Interval {
            interval_hours: hours,
            interval_minutes: minutes,
        }
    }

    pub fn cron(hour: impl Into<String>, minute: impl Into<String>) -> Self {
        Self::Cron {
            cron_hour: Some(hour.into()),
            cron_minute: Some(minute.into()),
        }
    }
}

/// Body of `POST /cron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronSetupRequest {
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Interface the scheduled jobs should use instead of the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_iface: Option<String>,
}

impl CronSetupRequest {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            source_iface: None,
        }
    }

    pub fn with_source_iface(mut self, iface: impl Into<String>) -> Self {
        self.source_iface = Some(iface.into());
        self
    }
}

/// Result of installing or removing the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CronActionResponse {
    pub ok: bool,
    pub message: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
