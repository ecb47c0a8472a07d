use crate::data::filter::{matching_rows, Selection};
use crate::data::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Bar chart data
// ---------------------------------------------------------------------------

/// One bar per distinct category value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Y-axis meaning: "Count" or the aggregated numeric column name.
    pub value_label: String,
    /// `(category, bar height)` in display order.
    pub entries: Vec<(CellValue, f64)>,
}

/// Frequency counts of each distinct value of `column`, sorted by count
/// descending (ties by value order), mirroring the usual `value_counts`.
pub fn value_counts(dataset: &Dataset, column: &str) -> BarSeries {
    let mut entries: Vec<(CellValue, f64)> = dataset
        .unique_values
        .get(column)
        .map(|vals| vals.iter().map(|v| (v.clone(), 0.0)).collect())
        .unwrap_or_default();

    if let Some(idx) = dataset.column_index(column) {
        for row in &dataset.rows {
            if let Some(entry) = entries.iter_mut().find(|(v, _)| *v == row[idx]) {
                entry.1 += 1.0;
            }
        }
    }

    entries.sort_by(|(va, ca), (vb, cb)| {
        cb.total_cmp(ca).then_with(|| va.cmp(vb))
    });

    BarSeries {
        value_label: "Count".to_string(),
        entries,
    }
}

/// Sum of `y_column` per category of `x_column`, restricted to the selected
/// categories.  Non-numeric Y cells contribute nothing.
pub fn aggregate_sum(
    dataset: &Dataset,
    x_column: &str,
    y_column: &str,
    selected: &Selection,
) -> BarSeries {
    let mut entries: Vec<(CellValue, f64)> =
        selected.iter().map(|v| (v.clone(), 0.0)).collect();

    let x_idx = dataset.column_index(x_column);
    let y_idx = dataset.column_index(y_column);

    if let (Some(x_idx), Some(y_idx)) = (x_idx, y_idx) {
        for &row_i in &matching_rows(dataset, x_column, selected) {
            let row = &dataset.rows[row_i];
            let Some(y) = row[y_idx].as_f64() else {
                continue;
            };
            if let Some(entry) = entries.iter_mut().find(|(v, _)| *v == row[x_idx]) {
                entry.1 += y;
            }
        }
    }

    BarSeries {
        value_label: y_column.to_string(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::all_values;
    use crate::data::loader::load_reader;

    // The worked example from the behavior contract: 10 rows of city/sales.
    fn cities() -> Dataset {
        let csv = "city,sales\n\
                   Berlin,10\nParis,20\nBerlin,5\nTokyo,7\nParis,1\n\
                   Berlin,3\nTokyo,9\nBerlin,2\nParis,4\nBerlin,6\n";
        load_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn counts_sum_to_row_count() {
        let ds = cities();
        assert_eq!(ds.shape(), (10, 2));

        let series = value_counts(&ds, "city");
        assert_eq!(series.entries.len(), 3);
        let total: f64 = series.entries.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 10.0);
    }

    #[test]
    fn counts_are_sorted_descending() {
        let series = value_counts(&cities(), "city");
        let counts: Vec<f64> = series.entries.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![5.0, 3.0, 2.0]);
        assert_eq!(series.entries[0].0, CellValue::String("Berlin".into()));
        assert_eq!(series.value_label, "Count");
    }

    #[test]
    fn aggregate_sums_y_per_category() {
        let ds = cities();
        let selected = all_values(&ds, "city");
        let series = aggregate_sum(&ds, "city", "sales", &selected);

        let get = |name: &str| {
            series
                .entries
                .iter()
                .find(|(v, _)| *v == CellValue::String(name.into()))
                .map(|(_, s)| *s)
                .unwrap()
        };
        assert_eq!(get("Berlin"), 26.0);
        assert_eq!(get("Paris"), 25.0);
        assert_eq!(get("Tokyo"), 16.0);
        assert_eq!(series.value_label, "sales");
    }

    #[test]
    fn aggregate_ignores_unselected_categories() {
        let ds = cities();
        let mut selected = Selection::new();
        selected.insert(CellValue::String("Tokyo".into()));
        let series = aggregate_sum(&ds, "city", "sales", &selected);

        assert_eq!(series.entries.len(), 1);
        assert_eq!(series.entries[0], (CellValue::String("Tokyo".into()), 16.0));
    }
}
