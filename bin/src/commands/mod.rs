//! CLI command implementations.

pub(crate) mod annotate;
pub(crate) mod estimate;
pub(crate) mod slot;
