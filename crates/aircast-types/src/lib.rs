//! Core types for aircast airing-schedule inference.
//!
//! This crate provides the value types used throughout aircast:
//!
//! - [`WeeklySlot`] - Day of week and broadcast time, parsed from listing text
//! - [`AiredRange`] - Start date of an airing range and whether its end is open
//! - [`InstallmentCount`] - Positive total number of installments
//! - [`EstimationResult`] - Projected end date and released-count estimate
//! - [`reference_offset`] - The fixed UTC+9 reference timezone

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/aircast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aired;
mod count;
mod error;
mod estimate;
mod reference;
mod slot;

pub use aired::{AiredRange, RANGE_SEPARATOR, UNRESOLVED_END, parse_start_date};
pub use count::InstallmentCount;
pub use error::{
    AiredRangeError, AircastError, CountError, Result, ScheduleError, SlotError, SlotParseError,
};
pub use estimate::{EstimateMethod, EstimationResult};
pub use reference::{
    REFERENCE_LABEL, REFERENCE_OFFSET_SECS, at_reference, reference_midnight, reference_offset,
};
pub use slot::WeeklySlot;
