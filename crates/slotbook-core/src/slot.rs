//! The one-hour `TimeSlot` value type and the half-open overlap test.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open time interval `[start, end)` — a booked meeting or a candidate
/// slot. In this system every slot is exactly one hour, on the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    /// Build the one-hour slot starting at `start_hour:00` on `date`.
    ///
    /// Returns `None` when `start_hour` cannot anchor a same-day one-hour
    /// slot (i.e. `start_hour > 22`).
    pub fn hour(date: NaiveDate, start_hour: u32) -> Option<TimeSlot> {
        let start = date.and_hms_opt(start_hour, 0, 0)?;
        let end = date.and_hms_opt(start_hour + 1, 0, 0)?;
        Some(TimeSlot { start, end })
    }

    /// Two slots overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent slots where one ends exactly when the other starts are NOT
    /// overlapping.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The hour at which the slot starts.
    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }
}

impl fmt::Display for TimeSlot {
    /// Renders the hour range, e.g. `10:00 to 11:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00 to {}:00", self.start.hour(), self.end.hour())
    }
}
