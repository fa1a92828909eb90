use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while tagging a cohort. Nothing here is retried or
/// recovered locally; the first error aborts the whole run before any
/// manifest bytes reach disk.
#[derive(Debug, Error)]
pub enum TagError {
    /// The image or label directory for the selected split does not exist.
    #[error("cohort directory not found: {}", .path.display())]
    MissingCohortDir { path: PathBuf },

    /// A cohort member's label map is absent or unreadable.
    #[error("label file missing or unreadable: {}", .path.display())]
    MissingLabel {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The label map exists but is not a decodable PNG stream.
    #[error("cannot decode label map: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },

    /// Decodable PNG whose pixel format cannot carry integer class ids.
    #[error("unsupported label format in {}: {:?} at {:?}", .path.display(), .color_type, .bit_depth)]
    UnsupportedLabelFormat {
        path: PathBuf,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("i/o failure at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
