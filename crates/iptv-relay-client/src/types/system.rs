//! System health diagnostic report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Warn,
    Error,
}

/// A single diagnostic check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    /// `network`, `udpxy`, `files`, `config` or `services`.
    pub category: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(default)]
    pub details: Option<BTreeMap<String, Value>>,
}

/// All checks of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckCategory {
    pub category: String,
    pub ok: bool,
    pub items: Vec<CheckItem>,
    pub passed: u32,
    pub failed: u32,
    pub warnings: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub warnings: u32,
}

/// Aggregate verdict of `POST /system/health-check`.
///
/// `ok` is false as soon as any check reports [`CheckStatus::Error`];
/// warnings alone do not fail it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckReport {
    pub ok: bool,
    /// Unix seconds.
    pub timestamp: i64,
    #[serde(default)]
    pub summary: HealthSummary,
    #[serde(default)]
    pub categories: BTreeMap<String, CheckCategory>,
    /// Every `error` and `warn` item, for quick display.
    #[serde(default)]
    pub failed_items: Vec<CheckItem>,
}

impl HealthCheckReport {
    /// Items that reported an error (warnings excluded).
    pub fn errors(&self) -> impl Iterator<Item = &CheckItem> {
        self.failed_items
            .iter()
            .filter(|item| item.status == CheckStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_parses_and_filters_errors() {
        let raw = json!({
            "ok": false,
            "timestamp": 1766466475,
            "summary": {"total": 3, "passed": 1, "failed": 1, "warnings": 1},
            "categories": {
                "udpxy": {
                    "category": "udpxy", "ok": false, "passed": 0, "failed": 1, "warnings": 0,
                    "items": [{"category": "udpxy", "name": "binary", "status": "error",
                               "message": "udpxy not installed"}]
                }
            },
            "failed_items": [
                {"category": "udpxy", "name": "binary", "status": "error",
                 "message": "udpxy not installed"},
                {"category": "files", "name": "epg age", "status": "warn",
                 "message": "EPG older than 24h", "details": {"age_h": 30}}
            ]
        });
        let report: HealthCheckReport = serde_json::from_value(raw).unwrap();
        assert!(!report.ok);
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.categories["udpxy"].failed, 1);
        let errors: Vec<_> = report.errors().map(|i| i.name.as_str()).collect();
        assert_eq!(errors, vec!["binary"]);
        assert_eq!(report.failed_items[1].details.as_ref().unwrap()["age_h"], json!(30));
    }
}
