//! Validation gate for a new or edited slot before it is persisted.
//!
//! Checks run in a fixed order and stop at the first failure:
//! start before end, minimum duration, maximum duration, then overlap with the
//! existing slots of the same day.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::overlaps;
use crate::slot::TimeSlot;

/// Duration bounds for a single class, in minutes (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotRules {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl Default for SlotRules {
    fn default() -> Self {
        Self {
            min_minutes: 30,
            max_minutes: 240,
        }
    }
}

impl SlotRules {
    fn too_short_message(&self) -> String {
        format!(
            "La duración mínima de una clase debe ser {} minutos",
            self.min_minutes
        )
    }

    fn too_long_message(&self) -> String {
        match self.max_minutes {
            60 => "La duración máxima de una clase es 1 hora".to_string(),
            m if m % 60 == 0 => format!("La duración máxima de una clase es {} horas", m / 60),
            m => format!("La duración máxima de una clase es {} minutos", m),
        }
    }
}

/// Outcome of validating a candidate slot. Serializes as
/// `{"valid":true}` or `{"valid":false,"error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Validate `candidate` against `existing` with the default 30–240 minute rules.
pub fn validate_new_slot(candidate: &TimeSlot, existing: &[TimeSlot]) -> Validation {
    validate_new_slot_with(&SlotRules::default(), candidate, existing)
}

/// Validate `candidate` against `existing` using explicit duration rules.
///
/// Only the first failing check is reported. The overlap check returns the
/// first same-day slot in `existing` order that collides.
pub fn validate_new_slot_with(
    rules: &SlotRules,
    candidate: &TimeSlot,
    existing: &[TimeSlot],
) -> Validation {
    let (start, end) = (candidate.start_minutes(), candidate.end_minutes());

    if start >= end {
        debug!(start = %candidate.start_time, end = %candidate.end_time, "slot starts at or after its end");
        return Validation::rejected("La hora de inicio debe ser menor que la hora de fin");
    }

    let duration = end - start;
    if duration < rules.min_minutes {
        debug!(duration, min = rules.min_minutes, "slot too short");
        return Validation::rejected(rules.too_short_message());
    }
    if duration > rules.max_minutes {
        debug!(duration, max = rules.max_minutes, "slot too long");
        return Validation::rejected(rules.too_long_message());
    }

    let clash = existing.iter().find(|slot| {
        slot.day == candidate.day
            && overlaps(start, end, slot.start_minutes(), slot.end_minutes())
    });
    if let Some(slot) = clash {
        debug!(day = %slot.day, start = %slot.start_time, end = %slot.end_time, "slot overlaps existing");
        return Validation::rejected(format!(
            "Este horario se solapa con {}-{} en {}",
            slot.start_time, slot.end_time, candidate.day
        ));
    }

    Validation::ok()
}
