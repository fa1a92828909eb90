//! Scene-category tagging for semantic-segmentation label maps.
//!
//! This crate provides utilities for:
//! - Loading per-pixel class-id label maps from PNG files
//! - Grouping class ids into coarse scene categories (mountain / sky / water)
//! - Thresholded per-image presence classification
//! - Building and writing the per-split CSV manifest

pub mod categories;
pub mod classify;
pub mod cohort;
pub mod error;
pub mod labelgrid;
pub mod manifest;
pub mod pipeline;

pub use categories::{CategoryFlags, CategoryTable};
pub use classify::classify;
pub use cohort::{discover_cohort, CohortEntry};
pub use error::TagError;
pub use labelgrid::LabelGrid;
pub use manifest::{Manifest, MANIFEST_HEADER};
pub use pipeline::run_cohort;
