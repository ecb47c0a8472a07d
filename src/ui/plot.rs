use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, Points};

use crate::charts::bar::BarSeries;
use crate::charts::histogram::Histogram;
use crate::charts::scatter::ScatterSeries;
use crate::color::ColorMap;
use crate::data::model::CellValue;

const DEFAULT_COLOR: Color32 = Color32::LIGHT_BLUE;
const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

/// Render one bar per category at integer positions, with category names on
/// the x-axis.
pub fn bar_chart(ui: &mut Ui, id: &str, series: &BarSeries, x_label: &str, colors: &ColorMap) {
    let bars: Vec<Bar> = series
        .entries
        .iter()
        .enumerate()
        .map(|(i, (value, height))| {
            Bar::new(i as f64, *height)
                .name(value.to_string())
                .fill(colors.color_for(value))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = series
        .entries
        .iter()
        .map(|(value, _)| value.to_string())
        .collect();

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .x_axis_label(x_label.to_string())
        .y_axis_label(series.value_label.clone())
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Histogram + marginal box plot
// ---------------------------------------------------------------------------

fn group_color(key: &Option<CellValue>, colors: Option<&ColorMap>) -> Color32 {
    match (key, colors) {
        (Some(value), Some(cm)) => cm.color_for(value),
        _ => DEFAULT_COLOR,
    }
}

fn group_name(key: &Option<CellValue>, column: &str) -> String {
    match key {
        Some(value) => value.to_string(),
        None => column.to_string(),
    }
}

/// Render the histogram; grouped histograms are stacked, like the usual
/// relative bar mode.
pub fn histogram_chart(ui: &mut Ui, id: &str, hist: &Histogram, column: &str, colors: Option<&ColorMap>) {
    let mut charts: Vec<BarChart> = Vec::new();

    for group in &hist.groups {
        let color = group_color(&group.key, colors);
        let bars: Vec<Bar> = group
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                Bar::new(hist.bin_center(i), count as f64)
                    .width(hist.bin_width)
                    .fill(color)
            })
            .collect();

        let mut chart = BarChart::new(bars)
            .name(group_name(&group.key, column))
            .color(color);
        {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart = chart.stack_on(&below);
        }
        charts.push(chart);
    }

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(column.to_string())
        .y_axis_label("Count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Compact horizontal box strip above the histogram: one five-number box per
/// group, sharing the histogram's value axis.
pub fn marginal_box(ui: &mut Ui, id: &str, hist: &Histogram, column: &str, colors: Option<&ColorMap>) {
    let elems: Vec<BoxElem> = hist
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let color = group_color(&group.key, colors);
            let s = &group.summary;
            BoxElem::new(
                i as f64,
                BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max),
            )
            .name(group_name(&group.key, column))
            .fill(color.gamma_multiply(0.4))
            .stroke(Stroke::new(1.5, color))
            .box_width(0.5)
            .whisker_width(0.4)
        })
        .collect();

    let height = 36.0 + 24.0 * hist.groups.len() as f32;
    Plot::new(id.to_string())
        .height(height)
        .show_axes([true, false])
        .allow_scroll(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Render the point series, one legend entry per color value.
pub fn scatter_chart(
    ui: &mut Ui,
    id: &str,
    series: &[ScatterSeries],
    x_label: &str,
    y_label: &str,
    colors: Option<&ColorMap>,
) {
    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_label.to_string())
        .y_axis_label(y_label.to_string())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for s in series {
                let color = group_color(&s.key, colors);
                let mut points = Points::new(s.points.clone()).radius(2.5).color(color);
                if let Some(key) = &s.key {
                    points = points.name(key.to_string());
                }
                plot_ui.points(points);
            }
        });
}
