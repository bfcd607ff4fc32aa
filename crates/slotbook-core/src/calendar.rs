//! Working-day rules: weekday and holiday checks.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::{SchedulerConfig, WorkingHours};

/// Calendar rules backed by a [`SchedulerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    config: SchedulerConfig,
}

impl Calendar {
    pub fn new(config: SchedulerConfig) -> Self {
        Calendar { config }
    }

    /// The configured working-hour window.
    pub fn working_hours(&self) -> WorkingHours {
        self.config.working_hours
    }

    /// Whether `date` is a working day.
    ///
    /// False for Saturdays and Sundays, false for dates in the holiday set,
    /// true otherwise. Total over all valid dates, no side effects.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        !self.config.holidays.contains(&date)
    }
}
