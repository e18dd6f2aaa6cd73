//! Display utilities and argument parsing for the aircast CLI.

use aircast_lib::prelude::*;
use aircast_lib::format_end_date;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;

/// Output format for computed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Parse an RFC 3339 instant, defaulting to the current time.
pub(crate) fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid instant (expected RFC 3339): {s}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Print an estimation result as an aligned table.
pub(crate) fn print_result(result: &EstimationResult, slot: Option<&WeeklySlot>) {
    println!("{:<16} {}", "Projected end:", format_end_date(result.projected_end_date));
    println!(
        "{:<16} {} ({})",
        "Released:",
        result.progress(),
        result.method
    );
    match slot {
        Some(slot) => println!("{:<16} {}", "Broadcast:", slot),
        None => println!("{:<16} unknown", "Broadcast:"),
    }
    if result.is_complete() {
        println!("\nAll episodes should be out.");
    }
}

/// Print every episode's air date, marking those estimated to be out.
pub(crate) fn print_schedule(dates: &[NaiveDate], released: u32) {
    println!("\n{:<6} {:<14} {}", "#", "Airs", "Out");
    println!("{}", "-".repeat(26));
    for (episode, date) in (1u32..).zip(dates) {
        let out = if episode <= released { "yes" } else { "" };
        println!("{:<6} {:<14} {}", episode, format_end_date(*date), out);
    }
}

/// Print any serializable value as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
