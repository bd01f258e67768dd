//! # schedule-engine
//!
//! Weekly class-schedule checks for a school administration dashboard.
//!
//! Every operation is a pure function over a slice of [`TimeSlot`]s supplied by
//! the caller: pairwise overlap detection, validation of a candidate slot before
//! it is persisted, merging of back-to-back slots into contiguous blocks, and
//! weekly aggregates (hours, active days, a one-line summary).
//!
//! ## Modules
//!
//! - [`day`] — The closed set of weekday labels and their canonical order
//! - [`time`] — `"HH:mm"` ↔ minutes-since-midnight conversion
//! - [`slot`] — The `TimeSlot` record
//! - [`conflict`] — Overlap predicate and pairwise conflict scan
//! - [`validate`] — Duration rules and candidate-slot validation
//! - [`summary`] — Summary string, consecutive-block merge, weekly totals
//! - [`error`] — Error types

pub mod conflict;
pub mod day;
pub mod error;
pub mod slot;
pub mod summary;
pub mod time;
pub mod validate;

pub use conflict::{find_conflicts, overlaps, Conflict, ConflictReport};
pub use day::Day;
pub use error::ScheduleError;
pub use slot::TimeSlot;
pub use summary::{
    active_days, merge_consecutive, summarize, weekly_hours, weekly_report, MergedBlock,
    WeeklyReport,
};
pub use time::{minutes_to_time, time_to_minutes, ClockTime};
pub use validate::{validate_new_slot, validate_new_slot_with, SlotRules, Validation};
