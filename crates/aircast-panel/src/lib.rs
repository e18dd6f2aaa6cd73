//! Info-panel integration for aircast.
//!
//! This crate connects the schedule arithmetic to a displayed info panel:
//!
//! - [`FieldExtractor`] / [`Renderer`] - What the augmenter needs from a panel
//! - [`InfoPanel`] - Both capabilities over an HTML fragment
//! - [`PanelConfig`] - Row labels and literals
//! - [`Augmenter`] - One read-evaluate-write pass over a panel

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/aircast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod augment;
mod config;
mod field;
mod html;
mod text;

pub use augment::{Applied, Augmenter, Outcome, Skip, format_end_date, substitute_end};
pub use config::{PanelConfig, PanelLabels};
pub use field::{ElementId, Field, FieldExtractor, Renderer};
pub use html::InfoPanel;
