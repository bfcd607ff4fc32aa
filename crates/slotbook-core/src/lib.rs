//! # slotbook-core
//!
//! Single-process meeting scheduler: tracks per-user bookings and computes
//! available hourly slots within a working-day calendar.
//!
//! All slots are exactly one hour and use half-open `[start, end)` semantics,
//! so back-to-back meetings never conflict. Working hours and holidays are
//! load-time configuration, not hard-coded constants.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slotbook_core::{Scheduler, SchedulerConfig};
//!
//! let mut scheduler = Scheduler::new(SchedulerConfig::default());
//! let date = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
//!
//! let confirmation = scheduler.schedule_meeting("Alice", date, 10).unwrap();
//! assert_eq!(
//!     confirmation.to_string(),
//!     "Meeting scheduled for Alice on 2025-03-17 from 10:00 to 11:00."
//! );
//!
//! // 8 working hours minus the booked one.
//! assert_eq!(scheduler.available_slots("Alice", date).len(), 7);
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — working-day rules (weekends, holidays)
//! - [`availability`] — free hourly slots from a booked-slot list
//! - [`store`] — per-user booking store with the no-overlap invariant
//! - [`scheduler`] — the scheduling facade tying the above together
//! - [`slot`] — the one-hour `TimeSlot` value type
//! - [`config`] — load-time working hours and holiday set
//! - [`error`] — rejection reasons

pub mod availability;
pub mod calendar;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod slot;
pub mod store;

pub use availability::available_slots;
pub use calendar::Calendar;
pub use config::{SchedulerConfig, WorkingHours};
pub use error::SchedulingRejected;
pub use scheduler::{Confirmation, Scheduler};
pub use slot::TimeSlot;
pub use store::BookingStore;
