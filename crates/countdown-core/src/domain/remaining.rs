//! Time Engine
//!
//! Breaks the distance between "now" and a target instant into
//! days/hours/minutes/seconds. Callers always supply "now".

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::UrgencyThresholds;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time until a target, derived and never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub is_expired: bool,
}

impl TimeRemaining {
    pub const EXPIRED: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_expired: true,
    };

    /// Highlight level for the remaining time
    pub fn urgency(&self, thresholds: &UrgencyThresholds) -> Urgency {
        if self.is_expired {
            Urgency::Expired
        } else if self.days < thresholds.critical_days {
            Urgency::Critical
        } else if self.days < thresholds.warning_days {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

/// How close a countdown is to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Expired,
    Critical,
    Warning,
    Normal,
}

impl Urgency {
    /// CSS modifier used by the card
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Expired => "expired",
            Urgency::Critical => "critical",
            Urgency::Warning => "warning",
            Urgency::Normal => "normal",
        }
    }
}

/// Compute the remaining time from `now` until `target`.
///
/// A target at or before `now` is expired and reports all zeros.
pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let delta = (target - now).num_milliseconds();
    if delta <= 0 {
        return TimeRemaining::EXPIRED;
    }

    // delta > 0, so every quotient below is non-negative
    TimeRemaining {
        days: (delta / MS_PER_DAY) as u64,
        hours: ((delta % MS_PER_DAY) / MS_PER_HOUR) as u64,
        minutes: ((delta % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
        seconds: ((delta % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
        is_expired: false,
    }
}
