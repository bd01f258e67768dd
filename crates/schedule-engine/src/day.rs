//! Weekday labels used by class schedules.
//!
//! The set is closed and ordered: `Lunes` (Monday) through `Domingo` (Sunday).
//! Every aggregate in this crate iterates days in this canonical order, which is
//! also the derived `Ord` order.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A day of the week, labelled as the school catalog labels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Lunes,
    Martes,
    #[serde(rename = "Miércoles", alias = "Miercoles")]
    Miercoles,
    Jueves,
    Viernes,
    #[serde(rename = "Sábado", alias = "Sabado")]
    Sabado,
    Domingo,
}

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Lunes,
        Day::Martes,
        Day::Miercoles,
        Day::Jueves,
        Day::Viernes,
        Day::Sabado,
        Day::Domingo,
    ];

    /// The display label, with accents.
    pub fn label(self) -> &'static str {
        match self {
            Day::Lunes => "Lunes",
            Day::Martes => "Martes",
            Day::Miercoles => "Miércoles",
            Day::Jueves => "Jueves",
            Day::Viernes => "Viernes",
            Day::Sabado => "Sábado",
            Day::Domingo => "Domingo",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Lunes" => Ok(Day::Lunes),
            "Martes" => Ok(Day::Martes),
            "Miércoles" | "Miercoles" => Ok(Day::Miercoles),
            "Jueves" => Ok(Day::Jueves),
            "Viernes" => Ok(Day::Viernes),
            "Sábado" | "Sabado" => Ok(Day::Sabado),
            "Domingo" => Ok(Day::Domingo),
            other => Err(ScheduleError::InvalidDay(other.to_string())),
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Lunes => Weekday::Mon,
            Day::Martes => Weekday::Tue,
            Day::Miercoles => Weekday::Wed,
            Day::Jueves => Weekday::Thu,
            Day::Viernes => Weekday::Fri,
            Day::Sabado => Weekday::Sat,
            Day::Domingo => Weekday::Sun,
        }
    }
}
