//! Load-time configuration: the working-hour window and the holiday set.
//!
//! Both are recognized, fixed settings rather than hard-coded literals —
//! callers construct a [`SchedulerConfig`] (or deserialize one from JSON)
//! and hand it to the scheduler at creation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Range;

/// The working-hour window, a half-open hour range `[start, end)` applied
/// uniformly to every working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: u32,
    pub end: u32,
}

impl WorkingHours {
    /// Whether `hour` is a valid meeting start within the window.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Iterator over every candidate start hour, in chronological order.
    pub fn hours(&self) -> Range<u32> {
        self.start..self.end
    }
}

impl Default for WorkingHours {
    /// 9 AM - 5 PM.
    fn default() -> Self {
        WorkingHours { start: 9, end: 17 }
    }
}

/// Scheduler configuration: working hours plus the set of exact holiday
/// dates on which no bookings are permitted.
///
/// Deserializes with per-field defaults, so a partial config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub working_hours: WorkingHours,
    pub holidays: BTreeSet<NaiveDate>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        let holidays = [(2025, 1, 1), (2025, 12, 25)]
            .into_iter()
            .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect();
        SchedulerConfig {
            working_hours: WorkingHours::default(),
            holidays,
        }
    }
}
