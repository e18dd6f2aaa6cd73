//! Airing-schedule inference for in-progress serialized works.
//!
//! This is a facade crate that re-exports functionality from the aircast
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use aircast_lib::prelude::*;
//!
//! let html = std::fs::read_to_string("panel.html")?;
//! let mut panel = InfoPanel::parse(&html);
//!
//! match Augmenter::default().run(&mut panel, chrono::Utc::now()) {
//!     Outcome::Applied(applied) => println!("{} out", applied.result.progress()),
//!     Outcome::Skipped(reason) => println!("skipped: {reason}"),
//! }
//! println!("{}", panel.render());
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/aircast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use aircast_types::*;

// Re-export schedule arithmetic
pub use aircast_estimate::{
    CADENCE_DAYS, InstallmentDates, anchor_instant, estimate_released, estimate_with_method,
    evaluate, installment_dates, project_end_date,
};

// Re-export panel integration
#[cfg(feature = "panel")]
pub use aircast_panel::{
    Applied, Augmenter, ElementId, Field, FieldExtractor, InfoPanel, Outcome, PanelConfig,
    PanelLabels, Renderer, Skip, format_end_date, substitute_end,
};

/// Prelude module for convenient imports.
///
/// ```
/// use aircast_lib::prelude::*;
/// ```
pub mod prelude {
    pub use aircast_types::{
        AiredRange, AircastError, EstimateMethod, EstimationResult, InstallmentCount, Result,
        WeeklySlot,
    };

    pub use aircast_estimate::{anchor_instant, estimate_released, evaluate, project_end_date};

    #[cfg(feature = "panel")]
    pub use aircast_panel::{
        Augmenter, FieldExtractor, InfoPanel, Outcome, PanelConfig, Renderer, Skip,
    };
}
