//! Weekly aggregates: summary line, consecutive-block merge, hour totals and
//! active days.
//!
//! All outputs follow the canonical day order (Lunes → Domingo) regardless of
//! the order slots were supplied in.

use serde::{Deserialize, Serialize};

use crate::conflict::{find_conflicts, ConflictReport};
use crate::day::Day;
use crate::slot::TimeSlot;
use crate::time::ClockTime;

/// Summary returned for a schedule with no slots.
pub const EMPTY_SUMMARY: &str = "Sin horario configurado";

/// A maximal run of same-day slots where each one ends exactly when the next starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedBlock {
    pub day: Day,
    pub start: ClockTime,
    pub end: ClockTime,
    /// Rooms of the merged slots, in block order.
    pub rooms: Vec<String>,
}

impl MergedBlock {
    fn open(slot: &TimeSlot) -> Self {
        Self {
            day: slot.day,
            start: slot.start_time,
            end: slot.end_time,
            rooms: vec![slot.room.clone()],
        }
    }

    /// The block as a single slot; rooms are joined with `", "`.
    pub fn to_slot(&self) -> TimeSlot {
        TimeSlot {
            day: self.day,
            start_time: self.start,
            end_time: self.end,
            room: self.rooms.join(", "),
        }
    }
}

/// Everything the dashboard shows about one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub summary: String,
    pub blocks: Vec<MergedBlock>,
    pub weekly_hours: f64,
    pub active_days: Vec<Day>,
    pub conflicts: ConflictReport,
}

fn slots_on(slots: &[TimeSlot], day: Day) -> impl Iterator<Item = &TimeSlot> {
    slots.iter().filter(move |s| s.day == day)
}

/// One line per active day, `"{day}: {start}-{end}, ..."`, joined with `" | "`.
///
/// Within a day, slots keep their input order (they are not sorted by time).
pub fn summarize(slots: &[TimeSlot]) -> String {
    if slots.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    Day::ALL
        .iter()
        .filter_map(|&day| {
            let ranges: Vec<String> = slots_on(slots, day)
                .map(|s| format!("{}-{}", s.start_time, s.end_time))
                .collect();
            (!ranges.is_empty()).then(|| format!("{}: {}", day, ranges.join(", ")))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Merge back-to-back slots of each day into contiguous blocks.
///
/// A slot extends the open block only when its start equals the block's end
/// exactly. Any gap, or any overlap, starts a new block.
pub fn merge_consecutive(slots: &[TimeSlot]) -> Vec<MergedBlock> {
    let mut blocks = Vec::new();

    for day in Day::ALL {
        let mut day_slots: Vec<&TimeSlot> = slots_on(slots, day).collect();
        day_slots.sort_by_key(|s| s.start_minutes());

        let mut current: Option<MergedBlock> = None;
        for slot in day_slots {
            if let Some(block) = current.as_mut() {
                if slot.start_time == block.end {
                    block.end = slot.end_time;
                    block.rooms.push(slot.room.clone());
                    continue;
                }
            }
            if let Some(done) = current.replace(MergedBlock::open(slot)) {
                blocks.push(done);
            }
        }
        blocks.extend(current);
    }

    blocks
}

/// Total scheduled hours, rounded half-up to one decimal.
///
/// This is a raw sum of slot durations: overlapping time is counted twice.
pub fn weekly_hours(slots: &[TimeSlot]) -> f64 {
    let total_minutes: i64 = slots.iter().map(|s| i64::from(s.duration_minutes())).sum();
    // One tenth of an hour is six minutes; +3 rounds the half up.
    let tenths = (total_minutes + 3).div_euclid(6);
    tenths as f64 / 10.0
}

/// The distinct days that have at least one slot, in canonical order.
pub fn active_days(slots: &[TimeSlot]) -> Vec<Day> {
    Day::ALL
        .into_iter()
        .filter(|&day| slots_on(slots, day).next().is_some())
        .collect()
}

/// Compute every aggregate for `slots`.
pub fn weekly_report(slots: &[TimeSlot]) -> WeeklyReport {
    WeeklyReport {
        summary: summarize(slots),
        blocks: merge_consecutive(slots),
        weekly_hours: weekly_hours(slots),
        active_days: active_days(slots),
        conflicts: find_conflicts(slots),
    }
}
