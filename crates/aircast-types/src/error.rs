//! Error types for aircast.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for aircast operations.
pub type Result<T> = std::result::Result<T, AircastError>;

/// Errors that can occur while inferring an airing schedule.
#[derive(Error, Debug)]
pub enum AircastError {
    /// Invalid weekly slot.
    #[error(transparent)]
    Slot(#[from] SlotError),

    /// Broadcast text could not be turned into a slot.
    #[error(transparent)]
    SlotParse(#[from] SlotParseError),

    /// Invalid installment count.
    #[error(transparent)]
    Count(#[from] CountError),

    /// Invalid airing range.
    #[error(transparent)]
    AiredRange(#[from] AiredRangeError),

    /// Schedule arithmetic failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for weekly slots with out-of-range fields.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// Hour or minute outside the clock range.
    #[error("Invalid slot time {hour}:{minute:02}: hour must be 0-23 and minute 0-59")]
    OutOfRange {
        /// The rejected hour.
        hour: u32,
        /// The rejected minute.
        minute: u32,
    },
}

/// Error returned when broadcast text does not describe a weekly slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotParseError {
    /// Text is not of the form `<Day> at <H>:<MM>`.
    #[error("unrecognized broadcast '{0}', expected e.g. 'Sundays at 23:30'")]
    Unrecognized(String),

    /// Text has the right shape but the time is not a valid clock time.
    #[error(transparent)]
    OutOfRange(#[from] SlotError),
}

/// Error for installment counts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// Count is zero.
    #[error("Installment count must be positive")]
    Zero,

    /// Text is not an integer.
    #[error("Invalid installment count '{0}'")]
    Invalid(String),
}

/// Error for airing range text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiredRangeError {
    /// Text has no `" to "` separator.
    #[error("Missing ' to ' separator in '{0}'")]
    MissingSeparator(String),

    /// Start portion is not a calendar date.
    #[error("Invalid start date '{0}'")]
    InvalidDate(String),
}

/// Error for schedule arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Result falls outside the representable calendar.
    #[error("Date overflow projecting {weeks} weeks from {start}")]
    DateOverflow {
        /// The start date.
        start: NaiveDate,
        /// Number of weeks added.
        weeks: u64,
    },
}
