//! Application Configuration
//!
//! Tunables shared by the store, the share link and the UI. Every field has a
//! default, so a partial JSON object is a valid config.

use serde::{Deserialize, Serialize};

/// Day thresholds for card highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyThresholds {
    /// Fewer whole days than this is critical
    pub critical_days: u64,
    /// Fewer whole days than this is a warning
    pub warning_days: u64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            critical_days: 3,
            warning_days: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key of the persisted collection in the key-value store
    pub storage_key: String,
    /// Query parameter carrying the share token
    pub share_param: String,
    /// Recompute cadence for visible countdowns
    pub tick_interval_ms: u32,
    /// How long the "Copied" acknowledgment stays up
    pub copied_feedback_ms: u32,
    /// How long a notification stays up
    pub notice_duration_ms: u32,
    pub urgency: UrgencyThresholds,
}

impl AppConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "countdowns";
    pub const DEFAULT_SHARE_PARAM: &'static str = "countdowns";
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            share_param: Self::DEFAULT_SHARE_PARAM.to_string(),
            tick_interval_ms: 1_000,
            copied_feedback_ms: 1_500,
            notice_duration_ms: 3_000,
            urgency: UrgencyThresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"tick_interval_ms": 250}"#).unwrap();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.storage_key, "countdowns");
        assert_eq!(config.urgency, UrgencyThresholds::default());
    }
}
