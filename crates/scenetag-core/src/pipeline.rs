use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::categories::{CategoryFlags, CategoryTable};
use crate::classify::classify;
use crate::cohort::discover_cohort;
use crate::error::TagError;
use crate::labelgrid::LabelGrid;
use crate::manifest::Manifest;

/// Classify every image in a cohort and write the manifest.
///
/// Label maps are loaded and classified across the rayon pool; rows are
/// collected back into cohort-listing order before anything touches disk,
/// so the manifest's row order always matches the image listing. The first
/// failure aborts the run with nothing written: a pre-existing manifest at
/// `out_path` survives a failed run untouched and is fully replaced by a
/// successful one.
///
/// Returns the number of data rows written.
pub fn run_cohort(
    image_dir: &Path,
    label_dir: &Path,
    out_path: &Path,
    threshold: f64,
    table: &CategoryTable,
) -> Result<usize, TagError> {
    if !label_dir.is_dir() {
        return Err(TagError::MissingCohortDir {
            path: label_dir.to_path_buf(),
        });
    }
    let cohort = discover_cohort(image_dir)?;

    let rows: Vec<(String, CategoryFlags)> = cohort
        .par_iter()
        .map(|entry| {
            let label_path = label_dir.join(format!("{}.png", entry.stem));
            let grid = LabelGrid::from_png(&label_path)?;
            Ok((entry.image_name.clone(), classify(&grid, table, threshold)))
        })
        .collect::<Result<_, TagError>>()?;

    let mut manifest = Manifest::new();
    for (image_name, flags) in &rows {
        manifest.push(image_name, *flags);
    }

    fs::write(out_path, manifest.render()).map_err(|source| TagError::Io {
        path: out_path.to_path_buf(),
        source,
    })?;
    Ok(manifest.rows())
}
