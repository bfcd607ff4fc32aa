//! Rejection reasons for the scheduling operation.

use serde::Serialize;
use thiserror::Error;

/// Why a scheduling request was rejected.
///
/// Rejections are returned as data, never used for control flow; every other
/// operation in the crate is total. The messages are the user-visible text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchedulingRejected {
    #[error("Cannot schedule on weekends or holidays.")]
    NonWorkingDay,

    #[error("Meeting time outside working hours.")]
    OutsideWorkingHours,

    #[error("Time slot not available.")]
    SlotUnavailable,
}

/// Convenience alias used throughout slotbook-core.
pub type Result<T> = std::result::Result<T, SchedulingRejected>;
