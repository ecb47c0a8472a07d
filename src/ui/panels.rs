use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::charts::histogram::{histogram, MAX_BINS, MIN_BINS};
use crate::charts::{bar, scatter};
use crate::color::ColorMap;
use crate::data::filter::Selection;
use crate::data::model::{CellValue, Dataset};
use crate::state::AppState;
use crate::ui::plot;

/// Rows shown in the overview preview table.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let (rows, cols) = ds.shape();
            ui.label(format!("{rows} rows × {cols} columns"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_path(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.n_rows(),
                    dataset.columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                // Parse failure: surface the error and render no panels.
                state.dataset = None;
                state.schema = Default::default();
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Overview: shape + preview table
// ---------------------------------------------------------------------------

pub fn overview(ui: &mut Ui, dataset: &Dataset) {
    ui.heading("Dataset Overview");
    let (rows, cols) = dataset.shape();
    ui.label(format!("Shape: ({rows}, {cols})"));
    ui.add_space(4.0);

    let n_preview = dataset.n_rows().min(PREVIEW_ROWS);

    ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().at_least(60.0), dataset.n_columns())
                .header(20.0, |mut header| {
                    for name in &dataset.columns {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for row_i in 0..n_preview {
                        body.row(18.0, |mut row| {
                            for cell in &dataset.rows[row_i] {
                                row.col(|ui| {
                                    ui.label(cell.to_string());
                                });
                            }
                        });
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Shared widgets
// ---------------------------------------------------------------------------

/// ComboBox over column names, returning the new pick if it changed.
fn column_combo(ui: &mut Ui, id: &str, label: &str, columns: &[String], current: &str) -> Option<String> {
    let mut picked = None;
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(current.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for col in columns {
                    if ui.selectable_label(current == col.as_str(), col).clicked() {
                        picked = Some(col.clone());
                    }
                }
            });
    });
    picked
}

/// Like [`column_combo`] with a leading "(none)" entry.  Returns
/// `Some(Some(col))` / `Some(None)` on change, `None` when untouched.
fn optional_column_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    columns: &[String],
    current: Option<&str>,
) -> Option<Option<String>> {
    let mut picked = None;
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(current.unwrap_or("(none)").to_string())
            .show_ui(ui, |ui: &mut Ui| {
                if ui.selectable_label(current.is_none(), "(none)").clicked() {
                    picked = Some(None);
                }
                for col in columns {
                    if ui.selectable_label(current == Some(col.as_str()), col).clicked() {
                        picked = Some(Some(col.clone()));
                    }
                }
            });
    });
    picked
}

/// Checkbox multiselect over a column's distinct values, with All / None
/// shortcuts.
fn category_multiselect(
    ui: &mut Ui,
    id: &str,
    column: &str,
    all_values: &BTreeSet<CellValue>,
    selected: &mut Selection,
    colors: Option<&ColorMap>,
) {
    let header_text = format!(
        "Categories from {column}  ({}/{})",
        selected.len(),
        all_values.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(id)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    *selected = all_values.clone();
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                }
            });

            for val in all_values {
                let mut text = RichText::new(val.to_string());
                if let Some(cm) = colors {
                    text = text.color(cm.color_for(val));
                }
                let mut checked = selected.contains(val);
                if ui.checkbox(&mut checked, text).changed() {
                    AppState::toggle_selection(selected, val);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Bar panel
// ---------------------------------------------------------------------------

/// Visible iff the dataset has at least one categorical column.
pub fn bar_panel(ui: &mut Ui, state: &mut AppState) {
    if !state.schema.has_categorical() {
        return;
    }
    ui.separator();
    ui.heading("Bar Plot");

    let categorical = state.schema.categorical.clone();
    let numeric = state.schema.numeric.clone();

    let current_x = state.bar.x_column.clone().unwrap_or_default();
    if let Some(col) = column_combo(ui, "bar_x", "Categorical column (X)", &categorical, &current_x) {
        state.set_bar_x(col);
    }

    if let Some(change) = optional_column_combo(
        ui,
        "bar_y",
        "Numeric column (Y)",
        &numeric,
        state.bar.y_column.as_deref(),
    ) {
        state.bar.y_column = change;
    }

    let Some(x_col) = state.bar.x_column.clone() else {
        return;
    };
    let Some(y_col) = state.bar.y_column.clone() else {
        // No Y: frequency counts of X.
        let Some(ds) = &state.dataset else { return };
        let series = bar::value_counts(ds, &x_col);
        let colors = ds
            .unique_values
            .get(&x_col)
            .map(ColorMap::new)
            .unwrap_or_else(|| ColorMap::new(&BTreeSet::new()));
        ui.label(format!("Count of {x_col}"));
        plot::bar_chart(ui, "bar_plot", &series, &x_col, &colors);
        return;
    };

    // Y selected: category subset, then sum of Y per category.
    let all_vals = state
        .dataset
        .as_ref()
        .and_then(|ds| ds.unique_values.get(&x_col).cloned())
        .unwrap_or_default();
    category_multiselect(ui, "bar_categories", &x_col, &all_vals, &mut state.bar.selected, None);

    let Some(ds) = &state.dataset else { return };
    let series = bar::aggregate_sum(ds, &x_col, &y_col, &state.bar.selected);
    let colors = ColorMap::new(&all_vals);
    ui.label(format!("Bar plot of {y_col} by {x_col}"));
    plot::bar_chart(ui, "bar_plot", &series, &x_col, &colors);
}

// ---------------------------------------------------------------------------
// Distribution panel
// ---------------------------------------------------------------------------

/// Visible iff the dataset has at least one numeric column.
pub fn distribution_panel(ui: &mut Ui, state: &mut AppState) {
    if !state.schema.has_numeric() {
        return;
    }
    ui.separator();
    ui.heading("Distribution Plot");

    let numeric = state.schema.numeric.clone();
    let categorical = state.schema.categorical.clone();

    let current = state.distribution.column.clone().unwrap_or_default();
    if let Some(col) = column_combo(ui, "hist_col", "Numeric column", &numeric, &current) {
        state.distribution.column = Some(col);
    }

    ui.add(
        egui::Slider::new(&mut state.distribution.bins, MIN_BINS..=MAX_BINS)
            .text("Number of bins"),
    );

    if let Some(change) = optional_column_combo(
        ui,
        "hist_group",
        "Group distribution by",
        &categorical,
        state.distribution.group_column.as_deref(),
    ) {
        state.distribution.group_column = change;
    }

    let Some(column) = state.distribution.column.clone() else {
        return;
    };
    let Some(ds) = &state.dataset else { return };

    let group_column = state.distribution.group_column.as_deref();
    let colors = group_column
        .and_then(|g| ds.unique_values.get(g))
        .map(ColorMap::new);

    match histogram(ds, &column, state.distribution.bins, group_column) {
        Some(hist) => {
            ui.label(format!("Distribution of {column}"));
            plot::marginal_box(ui, "hist_marginal", &hist, &column, colors.as_ref());
            plot::histogram_chart(ui, "hist_plot", &hist, &column, colors.as_ref());
        }
        None => {
            ui.label("No numeric values to plot.");
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter panel
// ---------------------------------------------------------------------------

/// Visible iff the dataset has at least two numeric columns.
pub fn scatter_panel(ui: &mut Ui, state: &mut AppState) {
    if state.schema.numeric.len() < 2 {
        return;
    }
    ui.separator();
    ui.heading("Scatter Plot");

    let numeric = state.schema.numeric.clone();
    let categorical = state.schema.categorical.clone();

    let current_x = state.scatter.x_column.clone().unwrap_or_default();
    if let Some(col) = column_combo(ui, "scatter_x", "X-axis", &numeric, &current_x) {
        state.scatter.x_column = Some(col);
    }

    let current_y = state.scatter.y_column.clone().unwrap_or_default();
    if let Some(col) = column_combo(ui, "scatter_y", "Y-axis", &numeric, &current_y) {
        state.scatter.y_column = Some(col);
    }

    if let Some(change) = optional_column_combo(
        ui,
        "scatter_color",
        "Color by",
        &categorical,
        state.scatter.color_column.as_deref(),
    ) {
        state.set_scatter_color(change);
    }

    if let Some(color_col) = state.scatter.color_column.clone() {
        let all_vals = state
            .dataset
            .as_ref()
            .and_then(|ds| ds.unique_values.get(&color_col).cloned())
            .unwrap_or_default();
        let colors = ColorMap::new(&all_vals);
        category_multiselect(
            ui,
            "scatter_categories",
            &color_col,
            &all_vals,
            &mut state.scatter.selected,
            Some(&colors),
        );
    }

    let (Some(x_col), Some(y_col)) = (
        state.scatter.x_column.clone(),
        state.scatter.y_column.clone(),
    ) else {
        return;
    };
    let Some(ds) = &state.dataset else { return };

    let color_column = state.scatter.color_column.as_deref();
    let colors = color_column
        .and_then(|c| ds.unique_values.get(c))
        .map(ColorMap::new);

    let series = scatter::scatter_series(ds, &x_col, &y_col, color_column, &state.scatter.selected);
    ui.label(format!("Scatter plot: {x_col} vs {y_col}"));
    plot::scatter_chart(ui, "scatter_plot", &series, &x_col, &y_col, colors.as_ref());
}
