//! Installment counts.

use std::num::NonZeroU32;
use std::str::FromStr;

use serde::Serialize;

use crate::CountError;

/// Total number of installments in a serialized work.
///
/// Always positive. Counts of one are representable but have no weekly
/// cadence to project, see [`InstallmentCount::is_projectable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InstallmentCount(NonZeroU32);

impl InstallmentCount {
    /// Creates a new count.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, CountError> {
        match NonZeroU32::new(count) {
            Some(n) => Ok(Self(n)),
            None => Err(CountError::Zero),
        }
    }

    /// Returns the count as a plain integer.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }

    /// Returns true if the count spans more than one week.
    #[must_use]
    pub const fn is_projectable(&self) -> bool {
        self.get() > 1
    }

    /// Number of whole weeks between the first and last installment.
    #[must_use]
    pub const fn weeks_spanned(&self) -> u32 {
        self.get() - 1
    }
}

impl std::fmt::Display for InstallmentCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InstallmentCount {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let count: u32 = trimmed
            .parse()
            .map_err(|_| CountError::Invalid(trimmed.to_string()))?;
        Self::new(count)
    }
}
