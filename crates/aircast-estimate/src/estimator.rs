//! Released-installment estimation.
//!
//! Two algorithms are used depending on what the listing provides:
//!
//! - **Anchored**: with a [`WeeklySlot`], the first installment is pinned to
//!   the slot's first occurrence on or after the start date, in the reference
//!   timezone, and whole weeks are counted from that instant.
//! - **Unanchored**: without a slot, whole calendar days are counted from
//!   midnight of the start date in the reference timezone.
//!
//! The two can disagree by up to six days around a cadence boundary. That
//! drift is accepted; neither path is corrected toward the other.

use aircast_types::{
    EstimateMethod, EstimationResult, InstallmentCount, ScheduleError, WeeklySlot, at_reference,
    reference_midnight,
};
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc};
use tracing::trace;

use crate::project_end_date;

/// Milliseconds in one calendar day.
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Milliseconds in one release cycle.
const WEEK_MS: i64 = 7 * DAY_MS;

/// Returns the release instant of the first installment.
///
/// `start` is advanced forward, never backward, by 0 to 6 days to land on the
/// slot's weekday, then pinned to the slot time in the reference timezone.
#[must_use]
pub fn anchor_instant(start: NaiveDate, slot: &WeeklySlot) -> Option<DateTime<FixedOffset>> {
    let days_ahead = (slot.day_index() + 7 - start.weekday().num_days_from_sunday()) % 7;
    let first_day = start.checked_add_days(Days::new(u64::from(days_ahead)))?;
    at_reference(first_day, slot.time())
}

/// Estimates how many installments have been released by `now`.
///
/// The result is always within `[0, total]`.
#[must_use]
pub fn estimate_released(
    start: NaiveDate,
    total: InstallmentCount,
    slot: Option<&WeeklySlot>,
    now: DateTime<Utc>,
) -> u32 {
    estimate_with_method(start, total, slot, now).0
}

/// Like [`estimate_released`], also reporting which algorithm was used.
#[must_use]
pub fn estimate_with_method(
    start: NaiveDate,
    total: InstallmentCount,
    slot: Option<&WeeklySlot>,
    now: DateTime<Utc>,
) -> (u32, EstimateMethod) {
    match slot.and_then(|slot| anchor_instant(start, slot)) {
        Some(anchor) => {
            let released = released_since_anchor(anchor, total, now);
            trace!(%anchor, %now, released, "anchored estimate");
            (released, EstimateMethod::Anchored)
        }
        None => {
            let released = released_since_start(start, total, now);
            trace!(%start, %now, released, "unanchored estimate");
            (released, EstimateMethod::Unanchored)
        }
    }
}

/// Projects the end date and estimates the released count in one pass.
///
/// # Errors
///
/// Returns an error if the projected end date overflows the calendar.
pub fn evaluate(
    start: NaiveDate,
    total: InstallmentCount,
    slot: Option<&WeeklySlot>,
    now: DateTime<Utc>,
) -> Result<EstimationResult, ScheduleError> {
    let projected_end_date = project_end_date(start, total)?;
    let (released_count, method) = estimate_with_method(start, total, slot, now);

    Ok(EstimationResult {
        projected_end_date,
        released_count,
        total_count: total.get(),
        method,
    })
}

fn released_since_anchor(
    anchor: DateTime<FixedOffset>,
    total: InstallmentCount,
    now: DateTime<Utc>,
) -> u32 {
    let elapsed_ms = now.signed_duration_since(anchor).num_milliseconds();
    if elapsed_ms < 0 {
        return 0;
    }
    clamp_released(elapsed_ms / WEEK_MS, total)
}

fn released_since_start(start: NaiveDate, total: InstallmentCount, now: DateTime<Utc>) -> u32 {
    let Some(midnight) = reference_midnight(start) else {
        return 0;
    };

    let days_diff = now
        .signed_duration_since(midnight)
        .num_milliseconds()
        .div_euclid(DAY_MS);
    if days_diff < 0 {
        return 0;
    }
    clamp_released(days_diff / 7, total)
}

/// Converts whole elapsed cycles into a count, the first cycle included.
fn clamp_released(cycles: i64, total: InstallmentCount) -> u32 {
    let released = cycles.saturating_add(1).min(i64::from(total.get()));
    u32::try_from(released).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Weekday};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn count(n: u32) -> InstallmentCount {
        InstallmentCount::new(n).unwrap()
    }

    fn sunday_2330() -> WeeklySlot {
        WeeklySlot::new(Weekday::Sun, 23, 30).unwrap()
    }

    #[test]
    fn test_anchor_same_weekday() {
        let anchor = anchor_instant(date(2024, 1, 7), &sunday_2330()).unwrap();

        // 23:30 JST is 14:30 UTC on the same day
        assert_eq!(anchor.with_timezone(&Utc), utc(2024, 1, 7, 14, 30));
        assert_eq!(anchor.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_anchor_advances_forward() {
        // Monday start, Sunday slot: six days later
        let anchor = anchor_instant(date(2024, 1, 8), &sunday_2330()).unwrap();
        assert_eq!(anchor.date_naive(), date(2024, 1, 14));

        // Saturday start, Sunday slot: next day
        let anchor = anchor_instant(date(2024, 1, 6), &sunday_2330()).unwrap();
        assert_eq!(anchor.date_naive(), date(2024, 1, 7));
    }

    #[test]
    fn test_anchored_at_anchor_is_one() {
        let now = utc(2024, 1, 7, 14, 30);
        let (released, method) =
            estimate_with_method(date(2024, 1, 7), count(12), Some(&sunday_2330()), now);

        assert_eq!(released, 1);
        assert_eq!(method, EstimateMethod::Anchored);
    }

    #[test]
    fn test_anchored_before_anchor_is_zero() {
        let now = utc(2024, 1, 7, 14, 30) - TimeDelta::milliseconds(1);
        assert_eq!(
            estimate_released(date(2024, 1, 7), count(12), Some(&sunday_2330()), now),
            0
        );
    }

    #[test]
    fn test_anchored_week_boundaries() {
        let slot = sunday_2330();
        let anchor = utc(2024, 1, 7, 14, 30);
        let start = date(2024, 1, 7);

        let just_before = anchor + TimeDelta::weeks(1) - TimeDelta::milliseconds(1);
        assert_eq!(estimate_released(start, count(12), Some(&slot), just_before), 1);

        let second = anchor + TimeDelta::weeks(1);
        assert_eq!(estimate_released(start, count(12), Some(&slot), second), 2);

        let fifth = anchor + TimeDelta::weeks(4) + TimeDelta::days(3);
        assert_eq!(estimate_released(start, count(12), Some(&slot), fifth), 5);
    }

    #[test]
    fn test_anchored_clamps_to_total() {
        let now = utc(2030, 1, 1, 0, 0);
        assert_eq!(
            estimate_released(date(2024, 1, 7), count(12), Some(&sunday_2330()), now),
            12
        );
    }

    #[test]
    fn test_now_offset_does_not_matter() {
        let slot = sunday_2330();
        let from_new_york = DateTime::parse_from_rfc3339("2024-01-07T09:30:00-05:00")
            .unwrap()
            .with_timezone(&Utc);
        let from_tokyo = DateTime::parse_from_rfc3339("2024-01-07T23:30:00+09:00")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(from_new_york, from_tokyo);
        assert_eq!(
            estimate_released(date(2024, 1, 7), count(12), Some(&slot), from_new_york),
            1
        );
    }

    #[test]
    fn test_unanchored_counts_start_week() {
        let start = date(2024, 1, 7);
        // midnight JST on the start date
        let midnight = utc(2024, 1, 6, 15, 0);

        let (released, method) = estimate_with_method(start, count(12), None, midnight);
        assert_eq!(released, 1);
        assert_eq!(method, EstimateMethod::Unanchored);

        let before = midnight - TimeDelta::minutes(1);
        assert_eq!(estimate_released(start, count(12), None, before), 0);

        let last_day_of_week = midnight + TimeDelta::days(6) + TimeDelta::hours(23);
        assert_eq!(estimate_released(start, count(12), None, last_day_of_week), 1);

        let second_week = midnight + TimeDelta::days(7);
        assert_eq!(estimate_released(start, count(12), None, second_week), 2);
    }

    #[test]
    fn test_unanchored_clamps_to_total() {
        let now = utc(2031, 6, 1, 0, 0);
        assert_eq!(estimate_released(date(2024, 1, 7), count(3), None, now), 3);
    }

    #[test]
    fn test_unparsed_slot_falls_back() {
        let slot = WeeklySlot::parse_broadcast("TBD");
        let now = utc(2024, 1, 20, 0, 0);
        let (released, method) = estimate_with_method(date(2024, 1, 7), count(12), slot.as_ref(), now);

        assert_eq!(method, EstimateMethod::Unanchored);
        assert_eq!(released, 2);
    }

    #[test]
    fn test_paths_drift_near_boundary() {
        // Start Monday, slot Sunday: anchored waits six days for the first
        // broadcast while the day count already credits one.
        let start = date(2024, 1, 8);
        let slot = sunday_2330();
        let now = utc(2024, 1, 10, 0, 0);

        assert_eq!(estimate_released(start, count(12), Some(&slot), now), 0);
        assert_eq!(estimate_released(start, count(12), None, now), 1);
    }

    #[test]
    fn test_estimate_stays_in_bounds() {
        let start = date(2024, 1, 7);
        let slot = sunday_2330();
        let base = utc(2023, 12, 1, 0, 0);

        for total in [2, 3, 12, 24] {
            for step in 0..120 {
                let now = base + TimeDelta::hours(31 * step);
                for slot in [Some(&slot), None] {
                    let released = estimate_released(start, count(total), slot, now);
                    assert!(released <= total);
                }
            }
        }
    }

    #[test]
    fn test_evaluate() {
        let now = utc(2024, 2, 1, 0, 0);
        let result = evaluate(date(2024, 1, 7), count(12), Some(&sunday_2330()), now).unwrap();

        assert_eq!(result.projected_end_date, date(2024, 3, 24));
        assert_eq!(result.released_count, 4);
        assert_eq!(result.total_count, 12);
        assert_eq!(result.method, EstimateMethod::Anchored);
    }

    fn arb_slot() -> impl Strategy<Value = Option<WeeklySlot>> {
        prop::option::of((0u8..7, 0u32..24, 0u32..60).prop_map(|(day, hour, minute)| {
            WeeklySlot::new(Weekday::try_from(day).unwrap(), hour, minute).unwrap()
        }))
    }

    proptest! {
        #[test]
        fn prop_released_within_total(
            start_offset in 0u64..20_000,
            total in 1u32..=2_000,
            slot in arb_slot(),
            minutes in -5_000_000i64..50_000_000,
        ) {
            let start = date(2000, 1, 1) + Days::new(start_offset);
            let now = start.and_hms_opt(0, 0, 0).unwrap().and_utc() + TimeDelta::minutes(minutes);

            let released = estimate_released(start, count(total), slot.as_ref(), now);
            prop_assert!(released <= total);
        }

        #[test]
        fn prop_released_never_decreases(
            total in 2u32..=500,
            slot in arb_slot(),
            minutes in -100_000i64..5_000_000,
            later in 0i64..1_000_000,
        ) {
            let start = date(2024, 1, 7);
            let now = start.and_hms_opt(0, 0, 0).unwrap().and_utc() + TimeDelta::minutes(minutes);

            let earlier = estimate_released(start, count(total), slot.as_ref(), now);
            let after = estimate_released(start, count(total), slot.as_ref(), now + TimeDelta::minutes(later));
            prop_assert!(earlier <= after);
        }
    }
}
