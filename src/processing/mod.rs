//! Prefix processing logic.
//!
//! - [`collapse`] - merging prefixes into the minimal covering set
//! - [`report`] - per-family collapse of a lookup result with counts

mod collapse;
mod report;

// Re-export public functions
pub use collapse::{collapse, collapse_prefixes};
pub use report::{build_report, Report, Stats};
