//! Panel labels and literals.

use std::path::Path;

use aircast_types::Result;
use serde::{Deserialize, Serialize};

/// Visible labels of the rows the augmenter reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLabels {
    /// Airing status row.
    pub status: String,
    /// Total episode count row.
    pub episodes: String,
    /// Airing range row.
    pub aired: String,
    /// Broadcast slot row.
    pub broadcast: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            status: "Status:".to_string(),
            episodes: "Episodes:".to_string(),
            aired: "Aired:".to_string(),
            broadcast: "Broadcast:".to_string(),
        }
    }
}

/// Configuration for [`Augmenter`](crate::Augmenter).
///
/// Fields missing from a JSON document keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Row labels.
    pub labels: PanelLabels,
    /// Status text that marks a work as in progress.
    pub airing_status: String,
    /// CSS class tagging the released-count annotation.
    pub annotation_class: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            labels: PanelLabels::default(),
            airing_status: "Currently Airing".to_string(),
            annotation_class: "aircast-estimate".to_string(),
        }
    }
}

impl PanelConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
