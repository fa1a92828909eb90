use crate::categories::{CategoryFlags, CategoryTable};
use crate::labelgrid::LabelGrid;

/// Decide which scene categories cover enough of a label map.
///
/// A category is present iff the number of cells whose class id belongs to
/// its set is strictly greater than `trunc(threshold * grid.len())`. The
/// cutoff truncates toward zero, so threshold 0.2 over a 10-cell grid needs
/// a count of at least 3, not 2. Categories are counted independently over
/// the full grid.
///
/// Any threshold is accepted: negative values make every category trivially
/// present, values above 1 make presence impossible. Pure function, no
/// shared state.
pub fn classify(grid: &LabelGrid, table: &CategoryTable, threshold: f64) -> CategoryFlags {
    let cutoff = (threshold * grid.len() as f64) as i64;

    let mut mountain = 0i64;
    let mut sky = 0i64;
    let mut water = 0i64;
    for id in &grid.data {
        if table.mountain.contains(id) {
            mountain += 1;
        }
        if table.sky.contains(id) {
            sky += 1;
        }
        if table.water.contains(id) {
            water += 1;
        }
    }

    CategoryFlags {
        mountain: mountain > cutoff,
        sky: sky > cutoff,
        water: water > cutoff,
    }
}
