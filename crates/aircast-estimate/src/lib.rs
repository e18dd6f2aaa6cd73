//! End-date projection and released-count estimation for aircast.
//!
//! This crate provides the weekly-cadence arithmetic behind aircast:
//!
//! - [`project_end_date`] - Date of the final installment
//! - [`installment_dates`] - Every installment's air date
//! - [`anchor_instant`] - First broadcast instant for a weekly slot
//! - [`estimate_released`] - Installments released by a given instant
//! - [`evaluate`] - Both facts as an [`EstimationResult`]
//!
//! [`EstimationResult`]: aircast_types::EstimationResult

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/aircast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod projector;

pub use estimator::{anchor_instant, estimate_released, estimate_with_method, evaluate};
pub use projector::{CADENCE_DAYS, InstallmentDates, installment_dates, project_end_date};
