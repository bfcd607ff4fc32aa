//! Per-user booking store.
//!
//! Maps a user identifier to that user's booked slots in insertion order
//! (not sorted by time). The no-overlap invariant is enforced at the single
//! mutation point, [`BookingStore::insert`], and never rechecked lazily.
//! Bookings are immutable and permanent for the life of the store; nothing
//! is ever deleted or updated in place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SchedulingRejected};
use crate::slot::TimeSlot;

/// In-memory mapping from user identifier to booked slots.
///
/// Created empty and owned by whoever needs one (typically a
/// [`crate::Scheduler`]), so tests can construct isolated instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingStore {
    bookings: HashMap<String, Vec<TimeSlot>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's booked slots in insertion order; empty for unknown users.
    pub fn bookings(&self, user: &str) -> &[TimeSlot] {
        self.bookings.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `slot` overlaps any of the user's existing bookings.
    pub fn has_conflict(&self, user: &str, slot: &TimeSlot) -> bool {
        self.bookings(user).iter().any(|booked| slot.overlaps(booked))
    }

    /// Append `slot` to the user's bookings, creating the user's entry if
    /// absent.
    ///
    /// Fails with [`SchedulingRejected::SlotUnavailable`] when the slot
    /// overlaps an existing booking; on failure the store is unchanged.
    pub fn insert(&mut self, user: &str, slot: TimeSlot) -> Result<()> {
        if self.has_conflict(user, &slot) {
            return Err(SchedulingRejected::SlotUnavailable);
        }
        self.bookings.entry(user.to_string()).or_default().push(slot);
        Ok(())
    }
}
