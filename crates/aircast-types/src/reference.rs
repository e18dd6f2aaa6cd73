//! Fixed reference timezone used for all broadcast arithmetic.
//!
//! Broadcast listings quote times in UTC+9. The offset is a process-wide
//! constant and is never read from the host environment.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// Offset of the reference timezone east of UTC, in seconds.
pub const REFERENCE_OFFSET_SECS: i32 = 9 * 3600;

/// Label conventionally printed next to reference-timezone times.
pub const REFERENCE_LABEL: &str = "JST";

/// Returns the reference timezone as a fixed offset.
#[must_use]
pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("UTC+9 is within the valid offset range")
}

/// Pins a calendar date and wall-clock time to the reference timezone.
///
/// Returns `None` only when the instant falls outside chrono's range.
#[must_use]
pub fn at_reference(date: NaiveDate, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
    reference_offset()
        .from_local_datetime(&date.and_time(time))
        .single()
}

/// Midnight of `date` in the reference timezone.
#[must_use]
pub fn reference_midnight(date: NaiveDate) -> Option<DateTime<FixedOffset>> {
    at_reference(date, NaiveTime::from_hms_opt(0, 0, 0)?)
}
