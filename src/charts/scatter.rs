use std::collections::BTreeMap;

use crate::data::filter::Selection;
use crate::data::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Scatter plot data
// ---------------------------------------------------------------------------

/// One point series; a single unnamed series when no color column is set,
/// otherwise one series per selected value of the color column.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub key: Option<CellValue>,
    pub points: Vec<[f64; 2]>,
}

/// Collect `(x, y)` points, split by an optional categorical color column.
///
/// Rows whose X or Y cell is not numeric are skipped.  With a color column,
/// rows whose color value is outside `selected` are excluded.
pub fn scatter_series(
    dataset: &Dataset,
    x_column: &str,
    y_column: &str,
    color_by: Option<&str>,
    selected: &Selection,
) -> Vec<ScatterSeries> {
    let Some(x_idx) = dataset.column_index(x_column) else {
        return Vec::new();
    };
    let Some(y_idx) = dataset.column_index(y_column) else {
        return Vec::new();
    };
    let color_idx = color_by.and_then(|c| dataset.column_index(c));

    let mut grouped: BTreeMap<Option<CellValue>, Vec<[f64; 2]>> = BTreeMap::new();

    for row in &dataset.rows {
        let (Some(x), Some(y)) = (row[x_idx].as_f64(), row[y_idx].as_f64()) else {
            continue;
        };
        let key = match color_idx {
            Some(ci) => {
                let val = &row[ci];
                if !selected.contains(val) {
                    continue;
                }
                Some(val.clone())
            }
            None => None,
        };
        grouped.entry(key).or_default().push([x, y]);
    }

    grouped
        .into_iter()
        .map(|(key, points)| ScatterSeries { key, points })
        .collect()
}
