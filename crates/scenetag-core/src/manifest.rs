use crate::categories::CategoryFlags;

/// First line of every manifest, regardless of cohort size.
pub const MANIFEST_HEADER: &str = "img_path,mountain,sky,water";

/// In-memory manifest: one row per classified image, in insertion order.
/// Rendered in full and written in a single overwrite so no partial
/// manifest is ever visible on disk.
#[derive(Debug, Default)]
pub struct Manifest {
    rows: Vec<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row keyed by the original image filename.
    pub fn push(&mut self, image_name: &str, flags: CategoryFlags) {
        self.rows.push(format!(
            "{},{},{},{}",
            image_name, flags.mountain, flags.sky, flags.water
        ));
    }

    /// Number of data rows; the header is not counted.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Render the full manifest text, header first, every line terminated
    /// with `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            MANIFEST_HEADER.len() + 1 + self.rows.iter().map(|r| r.len() + 1).sum::<usize>(),
        );
        out.push_str(MANIFEST_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}
