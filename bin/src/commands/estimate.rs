//! Estimate command implementation.
//!
//! This module computes the projected end date and released count from
//! literal arguments, without an info panel.

use crate::display::{Format, parse_now, print_json, print_result, print_schedule};
use aircast_lib::{installment_dates, parse_start_date};
use aircast_lib::prelude::*;
use anyhow::{Context, Result};
use tracing::warn;

/// Estimate the end date and released episodes for a start date and count.
pub(crate) fn estimate(
    start: &str,
    episodes: u32,
    broadcast: Option<&str>,
    now: Option<&str>,
    format: Format,
    schedule: bool,
) -> Result<()> {
    let start = parse_start_date(start).with_context(|| format!("Invalid start date: {start}"))?;
    let total = InstallmentCount::new(episodes).context("Episode count must be positive")?;
    if !total.is_projectable() {
        warn!("a single episode has no weekly cadence; the end date is the start date");
    }
    let now = parse_now(now)?;

    let slot = broadcast.and_then(|text| match text.parse::<WeeklySlot>() {
        Ok(slot) => Some(slot),
        Err(err) => {
            warn!(%err, "counting calendar days instead");
            None
        }
    });

    let result = evaluate(start, total, slot.as_ref(), now)?;

    let dates: Vec<_> = if schedule {
        installment_dates(start, total).collect()
    } else {
        Vec::new()
    };

    match format {
        Format::Text => {
            print_result(&result, slot.as_ref());
            if schedule {
                print_schedule(&dates, result.released_count);
            }
        }
        Format::Json if schedule => print_json(&serde_json::json!({
            "estimate": result,
            "schedule": dates,
        }))?,
        Format::Json => print_json(&result)?,
    }

    Ok(())
}
