use std::collections::BTreeMap;

use crate::data::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Histogram with optional grouping and a marginal box summary
// ---------------------------------------------------------------------------

pub const MIN_BINS: u32 = 5;
pub const MAX_BINS: u32 = 100;
pub const DEFAULT_BINS: u32 = 30;

/// Five-number summary used for the marginal box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Bin counts for one group (or the whole column when ungrouped).
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramGroup {
    /// Grouping value; `None` for the ungrouped histogram.
    pub key: Option<CellValue>,
    pub counts: Vec<u64>,
    pub summary: BoxSummary,
}

/// Histogram of one numeric column.  All groups share the same bin range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub bin_width: f64,
    pub bins: usize,
    pub groups: Vec<HistogramGroup>,
}

impl Histogram {
    /// Center of bin `i`, for bar placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }
}

/// Compute a histogram of `column` with `bins` buckets (clamped to
/// `[MIN_BINS, MAX_BINS]`), optionally split by a grouping column.
///
/// Non-numeric and non-finite cells are skipped.  Returns `None` when the
/// column holds no finite values.
pub fn histogram(
    dataset: &Dataset,
    column: &str,
    bins: u32,
    group_by: Option<&str>,
) -> Option<Histogram> {
    let bins = bins.clamp(MIN_BINS, MAX_BINS) as usize;

    let col_idx = dataset.column_index(column)?;
    let group_idx = group_by.and_then(|g| dataset.column_index(g));

    // Collect (value, group key) pairs, skipping non-numeric cells.
    let mut samples: Vec<(f64, Option<CellValue>)> = Vec::new();
    for row in &dataset.rows {
        let Some(v) = row[col_idx].as_f64() else {
            continue;
        };
        if !v.is_finite() {
            continue;
        }
        let key = group_idx.map(|gi| row[gi].clone());
        samples.push((v, key));
    }
    if samples.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (v, _) in &samples {
        min = min.min(*v);
        max = max.max(*v);
    }
    // A constant column still needs a non-degenerate range.
    if max <= min {
        min -= 0.5;
        max = min + 1.0;
    }
    let bin_width = (max - min) / bins as f64;

    let mut grouped: BTreeMap<Option<CellValue>, Vec<f64>> = BTreeMap::new();
    for (v, key) in samples {
        grouped.entry(key).or_default().push(v);
    }

    let groups = grouped
        .into_iter()
        .map(|(key, values)| {
            let mut counts = vec![0u64; bins];
            for &v in &values {
                let i = (((v - min) / bin_width) as usize).min(bins - 1);
                counts[i] += 1;
            }
            HistogramGroup {
                key,
                counts,
                summary: box_summary(&values),
            }
        })
        .collect();

    Some(Histogram {
        min,
        bin_width,
        bins,
        groups,
    })
}

/// Five-number summary with linear-interpolation quartiles.
/// Callers guarantee `values` is non-empty.
fn box_summary(values: &[f64]) -> BoxSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    BoxSummary {
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

/// Linear interpolation between closest ranks on pre-sorted data.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = p * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn dataset(csv: &str) -> Dataset {
        load_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn bins_are_clamped() {
        let ds = dataset("v\n1\n2\n3\n4\n5\n");
        let h = histogram(&ds, "v", 1, None).unwrap();
        assert_eq!(h.bins, MIN_BINS as usize);
        let h = histogram(&ds, "v", 1000, None).unwrap();
        assert_eq!(h.bins, MAX_BINS as usize);
        let h = histogram(&ds, "v", 30, None).unwrap();
        assert_eq!(h.bins, 30);
    }

    #[test]
    fn counts_sum_to_finite_value_count() {
        let ds = dataset("v\n1\n2\n2\n3\n\nx\n10\n");
        let h = histogram(&ds, "v", 10, None).unwrap();
        let total: u64 = h.groups[0].counts.iter().sum();
        // 5 numeric cells, one null and one string skipped
        assert_eq!(total, 5);
    }

    #[test]
    fn grouped_histograms_share_bin_range() {
        let ds = dataset("v,g\n1,a\n2,a\n9,b\n10,b\n");
        let h = histogram(&ds, "v", 10, Some("g")).unwrap();
        assert_eq!(h.groups.len(), 2);
        assert_eq!(h.min, 1.0);
        assert!((h.bin_width - 0.9).abs() < 1e-12);
        let per_group: Vec<u64> = h.groups.iter().map(|g| g.counts.iter().sum()).collect();
        assert_eq!(per_group, vec![2, 2]);
    }

    #[test]
    fn constant_column_gets_nonzero_width() {
        let ds = dataset("v\n7\n7\n7\n");
        let h = histogram(&ds, "v", 10, None).unwrap();
        assert!(h.bin_width > 0.0);
        let total: u64 = h.groups[0].counts.iter().sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn no_finite_values_yields_none() {
        let ds = dataset("v\nx\ny\n\n");
        assert!(histogram(&ds, "v", 10, None).is_none());
    }

    #[test]
    fn quartiles_match_linear_interpolation() {
        let ds = dataset("v\n1\n2\n3\n4\n5\n");
        let h = histogram(&ds, "v", 5, None).unwrap();
        let s = &h.groups[0].summary;
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q1, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.q3, 4.0);
        assert_eq!(s.max, 5.0);

        // Even-length: interpolated quartiles
        let ds = dataset("v\n1\n2\n3\n4\n");
        let h = histogram(&ds, "v", 5, None).unwrap();
        let s = &h.groups[0].summary;
        assert_eq!(s.q1, 1.75);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q3, 3.25);
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let ds = dataset("v\n0\n10\n");
        let h = histogram(&ds, "v", 5, None).unwrap();
        assert_eq!(h.groups[0].counts[0], 1);
        assert_eq!(h.groups[0].counts[4], 1);
    }
}
