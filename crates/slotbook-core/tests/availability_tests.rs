//! Tests for free hourly slot computation.

use chrono::NaiveDate;
use slotbook_core::{available_slots, Scheduler, SchedulerConfig, TimeSlot, WorkingHours};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slot(date: NaiveDate, hour: u32) -> TimeSlot {
    TimeSlot::hour(date, hour).unwrap()
}

/// Monday, a plain working day under the default config.
fn monday() -> NaiveDate {
    ymd(2025, 3, 17)
}

// ── Pure computation ────────────────────────────────────────────────────────

#[test]
fn empty_bookings_yield_full_window_in_order() {
    let slots = available_slots(&[], monday(), WorkingHours::default());

    // 9:00 through 16:00 start hours — 8 candidates.
    assert_eq!(slots.len(), 8);
    for (i, candidate) in slots.iter().enumerate() {
        assert_eq!(candidate.start_hour(), 9 + i as u32);
    }
}

#[test]
fn booked_hour_is_excluded() {
    let booked = vec![slot(monday(), 10)];
    let slots = available_slots(&booked, monday(), WorkingHours::default());

    assert_eq!(slots.len(), 7);
    assert!(!slots.contains(&slot(monday(), 10)));
}

#[test]
fn returned_slots_plus_bookings_cover_the_window_exactly() {
    let booked = vec![slot(monday(), 10), slot(monday(), 14)];
    let free = available_slots(&booked, monday(), WorkingHours::default());

    let mut all: Vec<TimeSlot> = free.iter().chain(booked.iter()).copied().collect();
    all.sort();

    // No gaps, no duplicates: every hour 9..17 appears exactly once.
    assert_eq!(all.len(), 8);
    for (i, candidate) in all.iter().enumerate() {
        assert_eq!(candidate.start_hour(), 9 + i as u32);
    }
}

#[test]
fn bookings_on_other_dates_do_not_block_candidates() {
    let tuesday = ymd(2025, 3, 18);
    let booked = vec![slot(tuesday, 10)];
    let slots = available_slots(&booked, monday(), WorkingHours::default());
    assert_eq!(slots.len(), 8);
}

#[test]
fn fully_booked_window_has_no_free_slots() {
    let hours = WorkingHours { start: 9, end: 11 };
    let booked = vec![slot(monday(), 9), slot(monday(), 10)];
    assert!(available_slots(&booked, monday(), hours).is_empty());
}

// ── Through the scheduler (working-day precondition, store reads) ───────────

#[test]
fn scheduler_returns_seven_slots_after_one_booking() {
    // Scenario: Alice books 10:00, then asks for availability.
    let mut scheduler = Scheduler::new(SchedulerConfig::default());
    scheduler.schedule_meeting("Alice", monday(), 10).unwrap();

    let slots = scheduler.available_slots("Alice", monday());
    assert_eq!(slots.len(), 7);
    assert!(!slots.contains(&slot(monday(), 10)));
}

#[test]
fn non_working_day_yields_no_slots() {
    let scheduler = Scheduler::new(SchedulerConfig::default());
    assert!(scheduler.available_slots("Alice", ymd(2025, 3, 15)).is_empty()); // Saturday
    assert!(scheduler.available_slots("Alice", ymd(2025, 1, 1)).is_empty()); // holiday
}

#[test]
fn unknown_user_gets_the_full_window() {
    let scheduler = Scheduler::new(SchedulerConfig::default());
    assert_eq!(scheduler.available_slots("NewUser", monday()).len(), 8);
}

#[test]
fn availability_is_per_user() {
    let mut scheduler = Scheduler::new(SchedulerConfig::default());
    scheduler.schedule_meeting("Alice", monday(), 10).unwrap();

    // Alice's booking does not shrink Bob's availability.
    assert_eq!(scheduler.available_slots("Alice", monday()).len(), 7);
    assert_eq!(scheduler.available_slots("Bob", monday()).len(), 8);
}

#[test]
fn availability_query_has_no_side_effects() {
    let mut scheduler = Scheduler::new(SchedulerConfig::default());
    scheduler.schedule_meeting("Alice", monday(), 10).unwrap();

    let first = scheduler.available_slots("Alice", monday());
    let second = scheduler.available_slots("Alice", monday());
    assert_eq!(first, second);
    assert_eq!(scheduler.view_meetings("Alice").len(), 1);
}
