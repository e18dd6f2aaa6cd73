//! Airing range parsing.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::AiredRangeError;

/// Separator between the start and end of an airing range.
pub const RANGE_SEPARATOR: &str = " to ";

/// Placeholder shown in place of an end date that is not known yet.
pub const UNRESOLVED_END: &str = "?";

/// Date layouts accepted for the start of a range, tried in order.
const START_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d"];

/// Month-only layouts; the range starts on the 1st of the month.
const MONTH_FORMATS: &[&str] = &["%b, %Y", "%b %Y"];

/// An airing range as listed on an info panel, e.g. `"Jan 7, 2024 to ?"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiredRange {
    /// First air date.
    pub start: NaiveDate,
    /// True if the end is the unresolved placeholder.
    pub open: bool,
}

impl AiredRange {
    /// Creates an open-ended range starting on `start`.
    #[must_use]
    pub const fn open_from(start: NaiveDate) -> Self {
        Self { start, open: true }
    }

    /// Returns true if `text` contains the open-ended `" to ?"` pattern.
    #[must_use]
    pub fn is_open_text(text: &str) -> bool {
        text.contains(&format!("{RANGE_SEPARATOR}{UNRESOLVED_END}"))
    }
}

impl std::fmt::Display for AiredRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start.format("%b %-d, %Y"))?;
        if self.open {
            write!(f, "{RANGE_SEPARATOR}{UNRESOLVED_END}")?;
        }
        Ok(())
    }
}

impl FromStr for AiredRange {
    type Err = AiredRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| AiredRangeError::MissingSeparator(s.to_string()))?;

        Ok(Self {
            start: parse_start_date(start)?,
            open: end.trim() == UNRESOLVED_END,
        })
    }
}

/// Parses the start portion of a range in any of the listing layouts.
///
/// Listings that only give a month (`Apr 2024`, `Jan, 2024`) start on the
/// 1st of that month.
///
/// # Errors
///
/// Returns an error if no layout yields a valid calendar date.
pub fn parse_start_date(text: &str) -> Result<NaiveDate, AiredRangeError> {
    let text = text.trim();
    START_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            let first = format!("1 {text}");
            MONTH_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&first, &format!("%d {fmt}")).ok())
        })
        .ok_or_else(|| AiredRangeError::InvalidDate(text.to_string()))
}
