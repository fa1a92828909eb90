//! Scene-tag manifest builder for the landscape segmentation dataset.
//! Lists one split's image directory, classifies every label map and writes
//! `file.txt` with per-image mountain/sky/water flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use scenetag_core::{run_cohort, CategoryTable};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "tagger",
    about = "Tag segmentation label maps with mountain/sky/water scene flags"
)]
struct Args {
    /// Dataset split to process.
    #[arg(long, default_value = "train", value_parser = ["train", "val", "test"])]
    mode: String,

    /// Fraction of the image a category must exceed to count as present.
    #[arg(short, long, default_value = "0.2")]
    threshold: f64,

    /// Dataset root containing `{mode}/imgs` and `{mode}/labels`.
    #[arg(long, default_value = "data")]
    data_root: PathBuf,

    /// Manifest destination (defaults to `{data_root}/{mode}/file.txt`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding the built-in category table.
    #[arg(long)]
    categories: Option<PathBuf>,
}

// ── Split layout ─────────────────────────────────────────────────────────────

/// Resolve the split's image/label directories and manifest destination.
fn split_paths(
    data_root: &Path,
    mode: &str,
    output: Option<PathBuf>,
) -> (PathBuf, PathBuf, PathBuf) {
    let split_dir = data_root.join(mode);
    let image_dir = split_dir.join("imgs");
    let label_dir = split_dir.join("labels");
    let out_path = output.unwrap_or_else(|| split_dir.join("file.txt"));
    (image_dir, label_dir, out_path)
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let table = match &args.categories {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse category table {}", path.display()))?
        }
        None => CategoryTable::default(),
    };

    let (image_dir, label_dir, out_path) =
        split_paths(&args.data_root, &args.mode, args.output.clone());

    eprintln!(
        "[tagger] Split: {} (threshold {})",
        args.mode, args.threshold
    );

    let rows = run_cohort(&image_dir, &label_dir, &out_path, args.threshold, &table)
        .with_context(|| format!("Tagging failed for split {}", args.mode))?;

    eprintln!("[tagger] Wrote {} rows to {}", rows, out_path.display());
    Ok(())
}
