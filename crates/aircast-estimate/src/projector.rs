//! End-date projection on a weekly cadence.

use aircast_types::{InstallmentCount, ScheduleError};
use chrono::{Days, NaiveDate};

/// Days between consecutive installments.
pub const CADENCE_DAYS: u64 = 7;

/// Projects the calendar date of the final installment.
///
/// The first installment airs on `start` and each following one a week
/// later, so the result is `start + (total - 1) * 7` days. Callers decide
/// whether a single-installment count is worth projecting.
///
/// # Errors
///
/// Returns an error if the result is outside the representable calendar.
pub fn project_end_date(
    start: NaiveDate,
    total: InstallmentCount,
) -> Result<NaiveDate, ScheduleError> {
    let weeks = u64::from(total.weeks_spanned());
    start
        .checked_add_days(Days::new(weeks * CADENCE_DAYS))
        .ok_or(ScheduleError::DateOverflow { start, weeks })
}

/// Returns an iterator over the air date of every installment.
#[must_use]
pub fn installment_dates(start: NaiveDate, total: InstallmentCount) -> InstallmentDates {
    InstallmentDates {
        next: Some(start),
        remaining: total.get(),
    }
}

/// Iterator over weekly installment dates.
#[derive(Debug, Clone)]
pub struct InstallmentDates {
    next: Option<NaiveDate>,
    remaining: u32,
}

impl Iterator for InstallmentDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.next?;
        self.remaining -= 1;
        self.next = current.checked_add_days(Days::new(CADENCE_DAYS));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_none() {
            return (0, Some(0));
        }
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
