//! Conversion between `"HH:mm"` wall-clock strings and minutes since midnight.
//!
//! Schedules never cross midnight, so a time of day is fully described by a
//! minute count in `0..=1439`. Parsing is strict: exactly two hour digits, a
//! colon, and two minute digits, within range. Malformed input is rejected
//! rather than carried through arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A validated wall-clock time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight. Returns `None` outside `0..=1439`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(ClockTime(minutes as u16))
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        time_to_minutes(s).map(|m| ClockTime(m as u16))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_time(self.minutes()))
    }
}

/// Parse `"HH:mm"` (24-hour, zero-padded) into `hour * 60 + minute`.
///
/// # Errors
/// Returns `ScheduleError::InvalidTime` unless the input is two digits, a colon,
/// and two digits with hour in 0–23 and minute in 0–59.
pub fn time_to_minutes(time: &str) -> Result<u32> {
    let invalid = || ScheduleError::InvalidTime(time.to_string());

    let (hh, mm) = time.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hh.parse().map_err(|_| invalid())?;
    let minute: u32 = mm.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as `"HH:mm"`.
///
/// Not clamped: values past the end of the day format with an hour of 24 or
/// more (`1500` → `"25:00"`).
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
