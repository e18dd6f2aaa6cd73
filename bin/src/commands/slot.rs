//! Slot command implementation.
//!
//! This module parses broadcast text and shows the weekly slot it describes.

use aircast_lib::prelude::*;
use aircast_lib::{parse_start_date, reference_offset};
use anyhow::{Context, Result, bail};
use chrono::Utc;

/// Parse broadcast text and print the slot, and its first airing if a start date is given.
pub(crate) fn show_slot(text: &str, start: Option<&str>) -> Result<()> {
    let slot = match text.parse::<WeeklySlot>() {
        Ok(slot) => slot,
        Err(err) => bail!("Not a weekly slot: {err}"),
    };

    println!("{:<12} {}", "Slot:", slot);
    println!("{:<12} {} (index {})", "Day:", slot.day(), slot.day_index());
    println!("{:<12} {:02}:{:02}", "Time:", slot.hour(), slot.minute());
    println!("{:<12} {}", "Offset:", reference_offset());

    if let Some(start) = start {
        let start =
            parse_start_date(start).with_context(|| format!("Invalid start date: {start}"))?;
        let anchor = anchor_instant(start, &slot).context("First airing is out of range")?;
        println!("{:<12} {}", "First:", anchor.to_rfc3339());
        println!("{:<12} {}", "First (UTC):", anchor.with_timezone(&Utc).to_rfc3339());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_slot() {
        assert!(show_slot("Sundays at 23:30 (JST)", Some("2024-01-08")).is_ok());
        assert!(show_slot("TBD", None).is_err());
        assert!(show_slot("Sundays at 23:30", Some("soon")).is_err());
    }
}
