//! Error types for schedule-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time (expected HH:mm): {0}")]
    InvalidTime(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
