// File: crates/explorer-core/src/downsample.rs
// Summary: Marker thinning: keep every n-th row whose transformed x/y fall inside the current axis extents.
// Notes:
// - Output is for marker placement only. Lines are drawn from the full series, otherwise
//   the line and the markers on it disagree about density.

use crate::accessor::{series_accessor, Accessor, Dim};
use crate::domain::{self, DataSet, Extent};
use crate::series::Series;
use crate::table::Row;
use crate::axis::AxisRole;

/// Indices of rows kept for markers. `interval <= 0` is treated as 1.
pub fn reduced_indices(
    rows: &[Row],
    x: &Accessor,
    y: &Accessor,
    x_extent: Extent,
    y_extent: Extent,
    interval: usize,
) -> Vec<usize> {
    let stride = interval.max(1);
    rows.iter()
        .enumerate()
        .step_by(stride)
        .filter(|(_, r)| x_extent.contains(x.value(r)) && y_extent.contains(y.value(r)))
        .map(|(i, _)| i)
        .collect()
}

/// Rows of `series` that get marker glyphs, against the current x domain and the
/// domain of the series' target axis. Recomputed fresh on every call.
pub fn reduced_rows<'a>(data: DataSet<'_>, series: &'a Series, marker_interval: usize) -> Vec<&'a Row> {
    let x_extent = domain::extent(data, AxisRole::X);
    let y_extent = domain::extent(data, series.target);
    let x = series_accessor(series, &data.axes.x, Dim::X);
    let y = series_accessor(series, &data.axes.x, Dim::Y);
    let rows = series.rows();
    reduced_indices(rows, &x, &y, x_extent, y_extent, marker_interval)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}
