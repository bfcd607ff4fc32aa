//! The scheduling facade: calendar rules + booking store behind one type.
//!
//! [`Scheduler`] owns its state, so tests construct isolated instances and a
//! process embeds exactly as many schedulers as it wants. `schedule_meeting`
//! takes `&mut self`, which makes the check-then-append sequence atomic with
//! respect to every other operation on the same scheduler; concurrent callers
//! must wrap the scheduler in a `Mutex` (there is no internal locking).

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::availability;
use crate::calendar::Calendar;
use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulingRejected};
use crate::slot::TimeSlot;
use crate::store::BookingStore;

/// Confirmation of a successfully scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub user: String,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meeting scheduled for {} on {} from {}.",
            self.user, self.date, self.slot
        )
    }
}

/// A meeting scheduler over one calendar and one booking store.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    calendar: Calendar,
    store: BookingStore,
}

impl Scheduler {
    /// A scheduler with an empty booking store.
    pub fn new(config: SchedulerConfig) -> Self {
        Scheduler::with_store(config, BookingStore::new())
    }

    /// A scheduler over an existing booking store.
    pub fn with_store(config: SchedulerConfig, store: BookingStore) -> Self {
        Scheduler {
            calendar: Calendar::new(config),
            store,
        }
    }

    /// Whether `date` is a working day. See [`Calendar::is_working_day`].
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.calendar.is_working_day(date)
    }

    /// Free one-hour slots for `user` on `date`, in chronological order.
    ///
    /// Empty on non-working days. A user with no bookings gets the full
    /// working-hour window. Snapshot of the current store state; no side
    /// effects.
    pub fn available_slots(&self, user: &str, date: NaiveDate) -> Vec<TimeSlot> {
        if !self.calendar.is_working_day(date) {
            return Vec::new();
        }
        availability::available_slots(
            self.store.bookings(user),
            date,
            self.calendar.working_hours(),
        )
    }

    /// Book the one-hour slot starting at `start_hour:00` on `date` for
    /// `user`.
    ///
    /// Checks run in a fixed order, so the reported reason is deterministic:
    /// working day first, then the candidate slot is constructed, then hour
    /// bounds, then the overlap check. An out-of-range hour on a holiday
    /// therefore reports [`SchedulingRejected::NonWorkingDay`].
    ///
    /// On success the store gains exactly one slot for `user`; a rejection
    /// never mutates the store, so repeating a rejected call yields the same
    /// reason again.
    pub fn schedule_meeting(
        &mut self,
        user: &str,
        date: NaiveDate,
        start_hour: u32,
    ) -> Result<Confirmation> {
        if !self.calendar.is_working_day(date) {
            return Err(SchedulingRejected::NonWorkingDay);
        }

        // Hours that cannot anchor a same-day slot (> 22) are necessarily
        // outside any working-hour window that fits in a day.
        let slot = TimeSlot::hour(date, start_hour)
            .ok_or(SchedulingRejected::OutsideWorkingHours)?;

        if !self.calendar.working_hours().contains(start_hour) {
            return Err(SchedulingRejected::OutsideWorkingHours);
        }

        self.store.insert(user, slot)?;

        Ok(Confirmation {
            user: user.to_string(),
            date,
            slot,
        })
    }

    /// The user's booked slots in insertion order; empty for unknown users.
    pub fn view_meetings(&self, user: &str) -> &[TimeSlot] {
        self.store.bookings(user)
    }

    /// Read access to the underlying store (e.g. for serialization).
    pub fn store(&self) -> &BookingStore {
        &self.store
    }
}
