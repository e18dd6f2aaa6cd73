//! Augmenting an airing record's info panel.
//!
//! [`Augmenter::run`] makes one pass over a panel:
//!
//! 1. The status row must read the configured in-progress literal.
//! 2. The episodes row must be an integer greater than one.
//! 3. The aired row must be open-ended (`"<start> to ?"`).
//! 4. The start must be a calendar date.
//! 5. The `?` is replaced with `~<projected end date>`.
//! 6. The broadcast row, if any, is parsed into a weekly slot.
//! 7. A `(~ released/total out)` annotation is appended to the episodes row
//!    when at least one episode is out and no annotation is there yet.
//!
//! Any failed step ends the pass without touching the panel.

use std::sync::OnceLock;

use aircast_estimate::evaluate;
use aircast_types::{
    AiredRange, AiredRangeError, CountError, EstimationResult, InstallmentCount, ScheduleError,
    WeeklySlot,
};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::PanelConfig;
use crate::field::{ElementId, Field, FieldExtractor, Renderer};

/// Matches the unresolved end of a range in markup, capturing the `?`.
const END_MARKER_PATTERN: &str = r"(?i)\bto(?:\s|&nbsp;)+(\?)";

/// Matches a trailing released-count annotation in visible text.
const ANNOTATION_PATTERN: &str = r"\s*\(~\s*[0-9]+/[0-9]+ out\)\s*$";

static END_MARKER_RE: OnceLock<Regex> = OnceLock::new();
static ANNOTATION_RE: OnceLock<Regex> = OnceLock::new();

fn end_marker_re() -> &'static Regex {
    END_MARKER_RE
        .get_or_init(|| Regex::new(END_MARKER_PATTERN).expect("end marker pattern should compile"))
}

fn annotation_re() -> &'static Regex {
    ANNOTATION_RE
        .get_or_init(|| Regex::new(ANNOTATION_PATTERN).expect("annotation pattern should compile"))
}

/// Why a pass left the panel untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// A required row is missing.
    #[error("no '{0}' row on the panel")]
    MissingField(String),

    /// The work is not in progress.
    #[error("status is '{0}', not airing")]
    NotAiring(String),

    /// The episode count is not a positive integer.
    #[error(transparent)]
    Count(#[from] CountError),

    /// A single episode has no weekly cadence to project.
    #[error("single-episode work has no weekly cadence")]
    SingleInstallment,

    /// The airing range already has an end.
    #[error("airing range '{0}' is not open-ended")]
    NotOpenEnded(String),

    /// The start of the airing range is not a date.
    #[error(transparent)]
    StartDate(#[from] AiredRangeError),

    /// The projected end date is not representable.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// The visible text is open-ended but the markup has no `to ?`.
    #[error("no unresolved end marker in the aired row markup")]
    MarkerNotInMarkup,
}

/// What a successful pass changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The derived facts.
    pub result: EstimationResult,
    /// Broadcast slot used for the estimate, if one was recognized.
    pub slot: Option<WeeklySlot>,
    /// True if the released-count annotation was appended in this pass.
    pub annotated: bool,
}

/// Result of one augmentation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The end date was substituted and the annotation considered.
    Applied(Applied),
    /// The pass stopped early and wrote nothing.
    Skipped(Skip),
}

impl Outcome {
    /// Returns true if the panel was augmented.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the derived facts of an applied pass.
    #[must_use]
    pub const fn result(&self) -> Option<&EstimationResult> {
        match self {
            Self::Applied(applied) => Some(&applied.result),
            Self::Skipped(_) => None,
        }
    }
}

/// Projects end dates and annotates released counts on info panels.
#[derive(Debug, Clone, Default)]
pub struct Augmenter {
    config: PanelConfig,
}

impl Augmenter {
    /// Creates an augmenter with the given configuration.
    #[must_use]
    pub const fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Runs one pass over `panel`, evaluated at `now`.
    ///
    /// Safe to repeat: an augmented range is no longer open-ended, and an
    /// existing annotation is never duplicated.
    pub fn run<P>(&self, panel: &mut P, now: DateTime<Utc>) -> Outcome
    where
        P: FieldExtractor + Renderer,
    {
        match self.try_run(panel, now) {
            Ok(applied) => {
                info!(
                    end = %applied.result.projected_end_date,
                    released = applied.result.released_count,
                    total = applied.result.total_count,
                    method = %applied.result.method,
                    annotated = applied.annotated,
                    "panel augmented"
                );
                Outcome::Applied(applied)
            }
            Err(skip) => {
                debug!(reason = %skip, "panel left unchanged");
                Outcome::Skipped(skip)
            }
        }
    }

    fn try_run<P>(&self, panel: &mut P, now: DateTime<Utc>) -> Result<Applied, Skip>
    where
        P: FieldExtractor + Renderer,
    {
        let labels = &self.config.labels;

        let status = require(&*panel, &labels.status)?;
        if status.text != self.config.airing_status {
            return Err(Skip::NotAiring(status.text));
        }

        let episodes = require(&*panel, &labels.episodes)?;
        let total: InstallmentCount = strip_annotation(&episodes.text).parse()?;
        if !total.is_projectable() {
            return Err(Skip::SingleInstallment);
        }

        let aired = require(&*panel, &labels.aired)?;
        if !AiredRange::is_open_text(&aired.text) {
            return Err(Skip::NotOpenEnded(aired.text));
        }
        let range: AiredRange = aired.text.parse()?;

        let slot = panel.lookup(&labels.broadcast).and_then(|field| {
            let slot = WeeklySlot::parse_broadcast(&field.text);
            if slot.is_none() {
                debug!(broadcast = %field.text, "broadcast not recognized, counting calendar days");
            }
            slot
        });

        let result = evaluate(range.start, total, slot.as_ref(), now)?;

        let replaced = panel
            .markup(aired.element)
            .and_then(|markup| substitute_end(markup, result.projected_end_date))
            .ok_or(Skip::MarkerNotInMarkup)?;
        panel.replace_content(aired.element, replaced);

        let annotated =
            result.released_count > 0 && self.annotate(panel, episodes.element, &result);

        Ok(Applied {
            result,
            slot,
            annotated,
        })
    }

    /// Appends the released-count annotation unless one is already present.
    fn annotate<P>(&self, panel: &mut P, element: ElementId, result: &EstimationResult) -> bool
    where
        P: FieldExtractor + Renderer,
    {
        let tag = format!(r#"class="{}""#, self.config.annotation_class);
        if panel
            .markup(element)
            .is_some_and(|markup| markup.contains(&tag))
        {
            debug!("released-count annotation already present");
            return false;
        }

        panel.append_content(element, &self.annotation_markup(result));
        true
    }

    /// Markup of the released-count annotation.
    #[must_use]
    pub fn annotation_markup(&self, result: &EstimationResult) -> String {
        format!(
            r#"<span class="{}"> (~ {} out)</span>"#,
            self.config.annotation_class,
            result.progress()
        )
    }
}

fn require<P: FieldExtractor>(panel: &P, label: &str) -> Result<Field, Skip> {
    panel
        .lookup(label)
        .ok_or_else(|| Skip::MissingField(label.to_string()))
}

/// Formats a projected end date the way the panel shows dates, e.g. `Mar 24, 2024`.
#[must_use]
pub fn format_end_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Replaces the unresolved `?` after `to` with `~<date>`, keeping all other markup.
#[must_use]
pub fn substitute_end(markup: &str, end: NaiveDate) -> Option<String> {
    let marker = end_marker_re().captures(markup)?.get(1)?;
    Some(format!(
        "{}~{}{}",
        &markup[..marker.start()],
        format_end_date(end),
        &markup[marker.end()..]
    ))
}

/// Drops a trailing `(~ n/m out)` annotation from visible text.
fn strip_annotation(text: &str) -> &str {
    annotation_re()
        .find(text)
        .map_or(text, |m| &text[..m.start()])
}
