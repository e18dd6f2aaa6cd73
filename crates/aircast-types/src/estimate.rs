//! Estimation output types.

use chrono::NaiveDate;
use serde::Serialize;

/// Which algorithm produced a released-count estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateMethod {
    /// Weeks counted from the first broadcast instant of a known slot.
    Anchored,
    /// Weeks counted from the start date at calendar-day granularity.
    Unanchored,
}

impl EstimateMethod {
    /// Returns the method as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anchored => "anchored",
            Self::Unanchored => "unanchored",
        }
    }
}

impl std::fmt::Display for EstimateMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived facts for one open-ended airing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimationResult {
    /// Calendar date of the final installment.
    pub projected_end_date: NaiveDate,
    /// Installments released as of the evaluation instant.
    pub released_count: u32,
    /// Total installments.
    pub total_count: u32,
    /// Algorithm used for `released_count`.
    pub method: EstimateMethod,
}

impl EstimationResult {
    /// Returns true once every installment has been released.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.released_count >= self.total_count
    }

    /// Formats the released count as `released/total`.
    #[must_use]
    pub fn progress(&self) -> String {
        format!("{}/{}", self.released_count, self.total_count)
    }
}
