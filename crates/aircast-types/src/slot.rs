//! Weekly broadcast slot and broadcast-text parsing.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{NaiveTime, Weekday};
use regex::Regex;
use serde::Serialize;

use crate::{REFERENCE_LABEL, SlotError, SlotParseError};

/// Matches `<Day>[s] at <H>:<MM>` with an optional trailing annotation.
const BROADCAST_PATTERN: &str = r"(?i)^\s*(monday|tuesday|wednesday|thursday|friday|saturday|sunday)s?\s+at\s+([0-9]{1,2}):([0-9]{2})(?:[^0-9]|$)";

static BROADCAST_RE: OnceLock<Regex> = OnceLock::new();

fn broadcast_re() -> &'static Regex {
    BROADCAST_RE
        .get_or_init(|| Regex::new(BROADCAST_PATTERN).expect("broadcast pattern should compile"))
}

/// A fixed weekly broadcast slot: day of week plus wall-clock time in the
/// reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeeklySlot {
    day: Weekday,
    hour: u32,
    minute: u32,
}

impl WeeklySlot {
    /// Creates a new slot, validating the clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if hour > 23 or minute > 59.
    pub const fn new(day: Weekday, hour: u32, minute: u32) -> Result<Self, SlotError> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::OutOfRange { hour, minute });
        }
        Ok(Self { day, hour, minute })
    }

    /// Parses broadcast text, discarding the reason when it is not a slot.
    ///
    /// Listings such as `"Unknown"` or `"Not scheduled once per week"` are
    /// expected input, so the failure is not an error for most callers.
    #[must_use]
    pub fn parse_broadcast(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Returns the day of week.
    #[must_use]
    pub const fn day(&self) -> Weekday {
        self.day
    }

    /// Returns the day as an index from 0 (Sunday) to 6 (Saturday).
    #[must_use]
    pub const fn day_index(&self) -> u32 {
        self.day.num_days_from_sunday()
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the slot's wall-clock time.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .expect("slot fields are validated at construction")
    }
}

impl std::fmt::Display for WeeklySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}s at {:02}:{:02} ({})",
            day_name(self.day),
            self.hour,
            self.minute,
            REFERENCE_LABEL
        )
    }
}

impl FromStr for WeeklySlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || SlotParseError::Unrecognized(s.to_string());

        let caps = broadcast_re().captures(s).ok_or_else(unrecognized)?;
        let day = parse_day(&caps[1]).ok_or_else(unrecognized)?;
        let hour: u32 = caps[2].parse().map_err(|_| unrecognized())?;
        let minute: u32 = caps[3].parse().map_err(|_| unrecognized())?;

        Ok(Self::new(day, hour, minute)?)
    }
}

/// Parses a full English day name (already matched case-insensitively).
fn parse_day(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

const fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
