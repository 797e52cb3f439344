// File: crates/explorer-core/tests/reducer.rs
// Purpose: Validate marker thinning: stride, extent filtering, non-positive intervals.

use std::rc::Rc;

use explorer_core::accessor::{series_accessor, Dim};
use explorer_core::axis::{AxisRole, Axes};
use explorer_core::domain::{DataSet, Extent};
use explorer_core::downsample::{reduced_indices, reduced_rows};
use explorer_core::series::{Series, SeriesId};
use explorer_core::table::Table;

fn ramp(n: usize) -> (Axes, Vec<Series>) {
    let rows = (0..n).map(|i| vec![i as f64, i as f64]).collect();
    let t = Rc::new(Table::from_columns("ramp", vec!["x".into(), "y".into()], rows).unwrap());
    let mut axes = Axes::default();
    axes.x.column = Some("x".into());
    axes.y.column = Some("y".into());
    let s = Series::new(SeriesId::new("ramp", AxisRole::Y, 0, 0), t, AxisRole::Y, Some("x".into()), Some("y".into()), axes.y.transform.clone());
    (axes, vec![s])
}

#[test]
fn stride_of_three_keeps_every_third() {
    let (axes, series) = ramp(10);
    let x = series_accessor(&series[0], &axes.x, Dim::X);
    let y = series_accessor(&series[0], &axes.x, Dim::Y);
    let all = Extent { min: -1.0, max: 100.0 };
    assert_eq!(reduced_indices(series[0].rows(), &x, &y, all, all, 3), vec![0, 3, 6, 9]);
}

#[test]
fn rows_follow_current_domains() {
    let (mut axes, series) = ramp(10);
    let kept: Vec<f64> = reduced_rows(DataSet::new(&axes, &series, &[]), &series[0], 3)
        .iter()
        .filter_map(|r| r.get("x"))
        .collect();
    assert_eq!(kept, vec![0.0, 3.0, 6.0, 9.0]);

    axes.x.max = Some(4.5);
    let kept: Vec<f64> = reduced_rows(DataSet::new(&axes, &series, &[]), &series[0], 3)
        .iter()
        .filter_map(|r| r.get("x"))
        .collect();
    assert_eq!(kept, vec![0.0, 3.0]);

    axes.y.min = Some(2.0);
    let kept = reduced_rows(DataSet::new(&axes, &series, &[]), &series[0], 1);
    assert_eq!(kept.len(), 3); // x in [2, 4.5]
}

#[test]
fn zero_interval_is_treated_as_one() {
    let (axes, series) = ramp(5);
    assert_eq!(reduced_rows(DataSet::new(&axes, &series, &[]), &series[0], 0).len(), 5);
}

#[test]
fn missing_values_never_get_markers() {
    let rows = vec![vec![0.0, 1.0], vec![1.0, f64::NAN], vec![2.0, 3.0]];
    let t = Rc::new(Table::from_columns("gaps", vec!["x".into(), "y".into()], rows).unwrap());
    let axes = Axes::default();
    let s = Series::new(SeriesId::new("gaps", AxisRole::Y, 0, 0), t, AxisRole::Y, Some("x".into()), Some("y".into()), axes.y.transform.clone());
    let x = series_accessor(&s, &axes.x, Dim::X);
    let y = series_accessor(&s, &axes.x, Dim::Y);
    let all = Extent { min: -10.0, max: 10.0 };
    assert_eq!(reduced_indices(s.rows(), &x, &y, all, all, 1), vec![0, 2]);
}
