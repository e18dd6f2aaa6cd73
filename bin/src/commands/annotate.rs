//! Annotate command implementation.
//!
//! This module runs one augmentation pass over an HTML info panel read from
//! disk and writes the result to a file or stdout.

use std::path::Path;

use crate::display::parse_now;
use aircast_lib::prelude::*;
use aircast_lib::format_end_date;
use anyhow::{Context, Result};
use tracing::debug;

/// Project the end date and annotate the released count of an info panel.
pub(crate) fn annotate(
    file: &Path,
    output: Option<&Path>,
    now: Option<&str>,
    config: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => PanelConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PanelConfig::default(),
    };
    let now = parse_now(now)?;

    let html = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read panel: {}", file.display()))?;
    let mut panel = InfoPanel::parse(&html);
    debug!(rows = panel.len(), file = %file.display(), "parsed info panel");

    let outcome = Augmenter::new(config).run(&mut panel, now);
    if !quiet {
        match &outcome {
            Outcome::Applied(applied) => eprintln!(
                "Projected end {}, ~{} out",
                format_end_date(applied.result.projected_end_date),
                applied.result.progress()
            ),
            Outcome::Skipped(reason) => eprintln!("Panel unchanged: {reason}"),
        }
    }

    let rendered = panel.render();
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
