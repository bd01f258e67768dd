//! Detect overlapping slots within a weekly schedule.
//!
//! Performs pairwise comparison of every slot against every later slot in the
//! input. Adjacent slots (where one ends exactly when another starts) are NOT
//! conflicts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::slot::TimeSlot;

/// Whether the half-open minute ranges `[start1, end1)` and `[start2, end2)` overlap.
///
/// Two intervals overlap iff `start1 < end2 && start2 < end1`, which excludes
/// the touching case where one's end equals the other's start.
pub fn overlaps(start1: u32, end1: u32, start2: u32, end2: u32) -> bool {
    start1 < end2 && start2 < end1
}

/// The three-case overlap test the dashboard forms were written against:
/// start of 1 inside `[start2, end2)`, end of 1 inside `(start2, end2]`, or
/// 1 containing 2.
///
/// Agrees with [`overlaps`] whenever both intervals are non-empty. For a
/// zero-length interval the containment case can still fire, which is why the
/// engine itself uses [`overlaps`].
pub fn overlaps_reference(start1: u32, end1: u32, start2: u32, end2: u32) -> bool {
    (start1 >= start2 && start1 < end2)
        || (end1 > start2 && end1 <= end2)
        || (start1 <= start2 && end1 >= end2)
}

/// A detected conflict between two slots on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub slot_a: TimeSlot,
    pub slot_b: TimeSlot,
    pub overlap_minutes: u32,
    pub message: String,
}

/// All conflicts in a schedule, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
    pub has_conflicts: bool,
}

/// Find all pairwise conflicts among `slots`.
///
/// Pairs `(i, j)` with `i < j` are scanned row-major, so conflicts come out
/// ordered by `i` and then `j`. A slot may appear in several conflicts.
pub fn find_conflicts(slots: &[TimeSlot]) -> ConflictReport {
    let mut conflicts = Vec::new();

    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.day != b.day {
                continue;
            }
            let (s1, e1) = (a.start_minutes(), a.end_minutes());
            let (s2, e2) = (b.start_minutes(), b.end_minutes());
            if !overlaps(s1, e1, s2, e2) {
                continue;
            }

            // Saturates for inverted stored slots (end before start).
            let overlap_minutes = e1.min(e2).saturating_sub(s1.max(s2));
            let message = format!(
                "Conflicto en {}: {}-{} se solapa con {}-{}",
                a.day, a.start_time, a.end_time, b.start_time, b.end_time
            );
            debug!(day = %a.day, overlap_minutes, "{}", message);

            conflicts.push(Conflict {
                slot_a: a.clone(),
                slot_b: b.clone(),
                overlap_minutes,
                message,
            });
        }
    }

    ConflictReport {
        has_conflicts: !conflicts.is_empty(),
        conflicts,
    }
}
