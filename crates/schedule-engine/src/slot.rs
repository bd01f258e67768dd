//! The weekly class slot record.

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::Result;
use crate::time::ClockTime;

/// One weekly occurrence of a class: a day, a `[start, end)` time range and a room.
///
/// `start < end` is expected of stored slots but not enforced here, because
/// candidate slots must be representable before validation rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day: Day,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub room: String,
}

impl TimeSlot {
    /// Build a slot from `"HH:mm"` strings.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTime` if either time is malformed.
    pub fn new(day: Day, start: &str, end: &str, room: impl Into<String>) -> Result<Self> {
        Ok(Self {
            day,
            start_time: start.parse()?,
            end_time: end.parse()?,
            room: room.into(),
        })
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_time.minutes()
    }

    pub fn end_minutes(&self) -> u32 {
        self.end_time.minutes()
    }

    /// Signed length in minutes; negative when the end precedes the start.
    pub fn duration_minutes(&self) -> i32 {
        self.end_minutes() as i32 - self.start_minutes() as i32
    }
}
