use serde::{Deserialize, Serialize};

/// Scene categories and the segmentation class ids grouped under each.
///
/// The default table is the fixed landscape taxonomy; alternate tables can
/// be constructed directly or deserialized from JSON. Class ids are assumed
/// to appear in at most one set — the taxonomy's convention, not enforced
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTable {
    pub mountain: Vec<u32>,
    pub sky: Vec<u32>,
    pub water: Vec<u32>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            mountain: vec![0, 7],
            sky: vec![1],
            water: vec![2, 3, 8, 16, 20],
        }
    }
}

/// Per-image presence flags, one per scene category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFlags {
    pub mountain: bool,
    pub sky: bool,
    pub water: bool,
}
