use crate::charts::histogram::DEFAULT_BINS;
use crate::data::filter::{all_values, Selection};
use crate::data::model::{CellValue, Dataset};
use crate::data::schema::{classify, Schema};

// ---------------------------------------------------------------------------
// Per-panel widget state
// ---------------------------------------------------------------------------

/// Bar panel: categorical X, optional numeric Y, category multiselect.
#[derive(Debug, Clone, Default)]
pub struct BarPanelState {
    pub x_column: Option<String>,
    pub y_column: Option<String>,
    pub selected: Selection,
}

/// Distribution panel: numeric column, bin slider, optional grouping.
#[derive(Debug, Clone)]
pub struct DistributionPanelState {
    pub column: Option<String>,
    pub bins: u32,
    pub group_column: Option<String>,
}

impl Default for DistributionPanelState {
    fn default() -> Self {
        Self {
            column: None,
            bins: DEFAULT_BINS,
            group_column: None,
        }
    }
}

/// Scatter panel: numeric X/Y, optional color column with multiselect.
#[derive(Debug, Clone, Default)]
pub struct ScatterPanelState {
    pub x_column: Option<String>,
    pub y_column: Option<String>,
    pub color_column: Option<String>,
    pub selected: Selection,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until user opens a file).
    pub dataset: Option<Dataset>,

    /// Numeric / categorical partition of the current dataset's columns.
    pub schema: Schema,

    pub bar: BarPanelState,
    pub distribution: DistributionPanelState,
    pub scatter: ScatterPanelState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset: reclassify columns and reset every
    /// panel to its defaults.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.schema = classify(&dataset);

        self.bar = BarPanelState {
            x_column: self.schema.categorical.first().cloned(),
            y_column: None,
            selected: Selection::new(),
        };
        if let Some(x) = &self.bar.x_column {
            self.bar.selected = all_values(&dataset, x);
        }

        self.distribution = DistributionPanelState {
            column: self.schema.numeric.first().cloned(),
            bins: DEFAULT_BINS,
            group_column: None,
        };

        self.scatter = ScatterPanelState {
            x_column: self.schema.numeric.first().cloned(),
            y_column: self.schema.numeric.first().cloned(),
            color_column: None,
            selected: Selection::new(),
        };

        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Change the bar panel's X column, reselecting all of its categories.
    pub fn set_bar_x(&mut self, column: String) {
        if let Some(ds) = &self.dataset {
            self.bar.selected = all_values(ds, &column);
        }
        self.bar.x_column = Some(column);
    }

    /// Change the scatter panel's color column, reselecting all categories.
    pub fn set_scatter_color(&mut self, column: Option<String>) {
        self.scatter.selected = match (&column, &self.dataset) {
            (Some(col), Some(ds)) => all_values(ds, col),
            _ => Selection::new(),
        };
        self.scatter.color_column = column;
    }

    /// Toggle a single category value in a selection set.
    pub fn toggle_selection(selected: &mut Selection, value: &CellValue) {
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn dataset() -> Dataset {
        let csv = "city,sales,price\nBerlin,10,1.5\nParis,20,2.5\nBerlin,5,0.5\n";
        load_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn set_dataset_initialises_panel_defaults() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        assert_eq!(state.schema.categorical, vec!["city"]);
        assert_eq!(state.schema.numeric, vec!["sales", "price"]);

        assert_eq!(state.bar.x_column.as_deref(), Some("city"));
        assert_eq!(state.bar.y_column, None);
        // Default multiselect: every distinct category selected
        assert_eq!(state.bar.selected.len(), 2);

        assert_eq!(state.distribution.column.as_deref(), Some("sales"));
        assert_eq!(state.distribution.bins, DEFAULT_BINS);
        assert_eq!(state.distribution.group_column, None);

        assert_eq!(state.scatter.x_column.as_deref(), Some("sales"));
        assert_eq!(state.scatter.y_column.as_deref(), Some("sales"));
        assert_eq!(state.scatter.color_column, None);
    }

    #[test]
    fn changing_bar_x_reselects_all_categories() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.bar.selected.clear();
        state.set_bar_x("city".to_string());
        assert_eq!(state.bar.selected.len(), 2);
    }

    #[test]
    fn scatter_color_selection_follows_column() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_scatter_color(Some("city".to_string()));
        assert_eq!(state.scatter.selected.len(), 2);

        state.set_scatter_color(None);
        assert!(state.scatter.selected.is_empty());
    }

    #[test]
    fn toggle_selection_flips_membership() {
        let mut sel = Selection::new();
        let v = CellValue::String("Berlin".into());
        AppState::toggle_selection(&mut sel, &v);
        assert!(sel.contains(&v));
        AppState::toggle_selection(&mut sel, &v);
        assert!(!sel.contains(&v));
    }
}
