//! Compute free hourly slots from a booked-slot list.
//!
//! Generates every one-hour candidate within the working-hour window in
//! chronological order and keeps the candidates that overlap no booking.

use chrono::NaiveDate;

use crate::config::WorkingHours;
use crate::slot::TimeSlot;

/// Free one-hour slots on `date` within `hours`, given the slots already
/// booked.
///
/// Candidates are emitted in chronological order. A candidate survives only
/// if it overlaps none of `booked` (half-open test — a meeting ending at
/// 10:00 does not block the 10:00 candidate). Bookings on other dates never
/// overlap the candidates and are ignored naturally.
///
/// Purely derived from its inputs; working-day rules are the caller's
/// concern (see [`crate::Scheduler::available_slots`]).
pub fn available_slots(booked: &[TimeSlot], date: NaiveDate, hours: WorkingHours) -> Vec<TimeSlot> {
    hours
        .hours()
        .filter_map(|hour| TimeSlot::hour(date, hour))
        .filter(|candidate| booked.iter().all(|slot| !candidate.overlaps(slot)))
        .collect()
}
