use std::collections::BTreeSet;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Category selection: which values of one column are kept
// ---------------------------------------------------------------------------

/// Multiselect state for a single categorical column.
pub type Selection = BTreeSet<CellValue>;

/// All distinct values of a column, i.e. the "everything selected" state.
pub fn all_values(dataset: &Dataset, column: &str) -> Selection {
    dataset
        .unique_values
        .get(column)
        .cloned()
        .unwrap_or_default()
}

/// Return indices of rows whose value in `column` is in the selected set.
///
/// An empty selection keeps nothing; a selection covering every unique value
/// keeps everything (no effective filter).
pub fn matching_rows(dataset: &Dataset, column: &str, selected: &Selection) -> Vec<usize> {
    let Some(idx) = dataset.column_index(column) else {
        return Vec::new();
    };
    if selected.is_empty() {
        return Vec::new();
    }
    if let Some(all_vals) = dataset.unique_values.get(column) {
        if selected.len() == all_vals.len() {
            return (0..dataset.n_rows()).collect();
        }
    }
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| selected.contains(&row[idx]))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn dataset() -> Dataset {
        let csv = "city,sales\nBerlin,10\nParis,20\nBerlin,5\nTokyo,7\n";
        load_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn full_selection_keeps_all_rows() {
        let ds = dataset();
        let selected = all_values(&ds, "city");
        assert_eq!(matching_rows(&ds, "city", &selected), vec![0, 1, 2, 3]);
    }

    #[test]
    fn subset_never_admits_outside_rows() {
        let ds = dataset();
        let mut selected = Selection::new();
        selected.insert(CellValue::String("Berlin".into()));
        let rows = matching_rows(&ds, "city", &selected);
        assert_eq!(rows, vec![0, 2]);
        for i in rows {
            assert_eq!(ds.value(i, "city"), Some(&CellValue::String("Berlin".into())));
        }
    }

    #[test]
    fn empty_selection_keeps_nothing() {
        let ds = dataset();
        assert!(matching_rows(&ds, "city", &Selection::new()).is_empty());
    }

    #[test]
    fn unknown_column_matches_nothing() {
        let ds = dataset();
        let selected = all_values(&ds, "city");
        assert!(matching_rows(&ds, "nope", &selected).is_empty());
    }
}
