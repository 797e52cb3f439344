// File: crates/explorer-core/tests/chart.rs
// Purpose: Validate the state container: pause flag, column binding, file sets, series slots, frames, config.

use std::cell::RefCell;
use std::rc::Rc;

use explorer_core::axis::{AxisRole, ScaleKind};
use explorer_core::chart::Chart;
use explorer_core::config::ExplorerConfig;
use explorer_core::table::Table;
use explorer_core::transform::{Rescale, TransformConfig};

mod common;
use common::Recorder;

fn run(name: &str, columns: &[&str], n: usize) -> Rc<Table> {
    let names = columns.iter().map(|c| c.to_string()).collect();
    let rows = (1..=n).map(|i| (0..columns.len()).map(|j| (i * (j + 1)) as f64).collect()).collect();
    Rc::new(Table::from_columns(name, names, rows).unwrap())
}

fn bound_chart() -> Chart {
    let mut c = Chart::new();
    c.register_tables(vec![run("run_a", &["model_number", "star_age", "mass", "log_L"], 11)]);
    c.assign_axis_column(AxisRole::X, "model_number");
    c.assign_axis_column(AxisRole::Y, "star_age");
    c
}

#[test]
fn paused_chart_drops_redraws() {
    let mut c = bound_chart();
    let before = c.redraw_count();
    assert!(!c.pause());
    assert!(c.is_paused());
    c.set_limits(AxisRole::X, Some(0.0), Some(5.0));
    assert!(c.update_plot().is_none());
    assert_eq!(c.redraw_count(), before);
    c.resume();
    let frame = c.update_plot().unwrap();
    assert_eq!(c.redraw_count(), before + 1);
    // the redraw reflects the write made while paused
    assert_eq!(frame.axis(AxisRole::X).unwrap().domain, (0.0, 5.0));
}

#[test]
fn batch_applies_several_writes_then_one_redraw() {
    let mut c = bound_chart();
    let before = c.redraw_count();
    c.batch(|c| {
        c.set_scale_kind(AxisRole::Y, ScaleKind::Log10);
        c.set_limits(AxisRole::Y, Some(1.0), Some(1000.0));
        c.set_marker_interval(AxisRole::Y, 2);
    });
    assert_eq!(c.redraw_count(), before);
    assert!(!c.is_paused());
    c.update_plot();
    assert_eq!(c.redraw_count(), before + 1);
    assert_eq!(c.axes.y.scale.unwrap().kind(), ScaleKind::Log10);
}

#[test]
fn log_hint_picks_scale_and_rescale() {
    let mut c = bound_chart();
    let before = c.redraw_count();
    c.assign_axis_column(AxisRole::Y, "log_L");
    assert_eq!(c.redraw_count(), before + 1);
    assert_eq!(c.axes.y.kind, ScaleKind::Log10);
    assert_eq!(c.axes.y.transform.get().rescale, Rescale::Exp);
    assert_eq!(c.axes.y.label, "L");
    // exponentiated values are all positive, so the log domain is usable
    let (lo, _) = c.axes.y.scale.unwrap().domain();
    assert!(lo > 1.0);

    c.assign_axis_column(AxisRole::Y, "mass");
    assert_eq!(c.axes.y.kind, ScaleKind::Linear);
    assert_eq!(c.axes.y.transform.get().rescale, Rescale::Linear);
    assert_eq!(c.slots(AxisRole::Y)[0].column.as_deref(), Some("mass"));
}

#[test]
fn multi_file_mode_hides_the_second_y_axis() {
    let mut c = bound_chart();
    c.assign_axis_column(AxisRole::YOther, "mass");
    assert_eq!(c.series().len(), 2);

    let b = run("run_b", &["model_number", "star_age"], 6);
    let a = Rc::clone(&c.tables()[0]);
    let frame = c.register_tables(vec![a, b]).unwrap();
    assert!(c.is_multi_file());
    let ids: Vec<&str> = c.series().iter().map(|s| s.id.0.as_str()).collect();
    assert_eq!(ids, vec!["run_a_y_0_0", "run_b_y_0_1"]);
    assert_eq!(c.series()[1].name, "star age (run_b)");
    // hidden, not unbound
    assert_eq!(c.axes.y_other.column.as_deref(), Some("mass"));
    assert!(frame.axis(AxisRole::YOther).is_none());
    assert_eq!(frame.series.len(), 2);
    assert_eq!(frame.series[1].line.len(), 6);
}

#[test]
fn axes_on_missing_columns_are_unbound() {
    let mut c = bound_chart();
    c.set_limits(AxisRole::Y, Some(0.0), Some(3.0));
    let rec = Rc::new(RefCell::new(Recorder::default()));
    c.add_listener(Box::new(Rc::clone(&rec)));

    let a = Rc::clone(&c.tables()[0]);
    let b = run("run_b", &["model_number", "mass"], 4);
    let before = c.redraw_count();
    c.register_tables(vec![a, b]);
    assert_eq!(c.redraw_count(), before + 1);
    assert_eq!(c.axes.y.column, None);
    assert_eq!(c.axes.y.min, None);
    assert_eq!(c.axes.x.column.as_deref(), Some("model_number"));
    assert!(c.series().is_empty());
    assert_eq!(rec.borrow().limits, vec![(AxisRole::Y, None, None)]);
}

#[test]
fn frame_carries_full_lines_and_thinned_markers() {
    let mut c = bound_chart();
    let frame = c.update_plot().unwrap();
    assert_eq!(frame.axes.len(), 2);
    let s = &frame.series[0];
    assert_eq!(s.line.len(), 11);
    assert!(s.markers.is_empty());
    // x pixels increase along the series, y pixels decrease as star_age grows
    assert!(s.line.windows(2).all(|w| w[1].0 > w[0].0 && w[1].1 < w[0].1));

    c.set_marker_interval(AxisRole::Y, 3);
    c.set_slot_style(AxisRole::Y, 0, true, true);
    let frame = c.update_plot().unwrap();
    let s = &frame.series[0];
    assert_eq!(s.line.len(), 11);
    assert_eq!(s.markers.len(), 4);
    assert_eq!(s.markers[1], s.line[3]);

    // markers outside the visible window are dropped, the line is not
    c.set_limits(AxisRole::X, Some(0.0), Some(5.0));
    let frame = c.update_plot().unwrap();
    assert_eq!(frame.series[0].markers.len(), 2);
    assert_eq!(frame.series[0].line.len(), 11);
}

#[test]
fn second_slot_adds_a_series_with_its_own_color() {
    let mut c = bound_chart();
    let idx = c.add_series_slot(AxisRole::Y).unwrap();
    assert_eq!(idx, 1);
    c.assign_series_column(AxisRole::Y, idx, "mass");
    assert_eq!(c.series().len(), 2);
    assert_ne!(c.series()[0].style.color, c.series()[1].style.color);
    // slot 0 keeps the axis binding
    assert_eq!(c.axes.y.column.as_deref(), Some("star_age"));
    assert!(c.add_series_slot(AxisRole::X).is_none());

    c.remove_series_slot(AxisRole::Y, 0);
    assert_eq!(c.series().len(), 1);
    assert_eq!(c.axes.y.column.as_deref(), Some("mass"));
}

#[test]
fn slot_transform_detaches_from_the_axis() {
    let mut c = bound_chart();
    assert!(c.series()[0].transform.shares_with(&c.axes.y.transform));
    let own = c.set_slot_transform(AxisRole::Y, 0, Some(TransformConfig::default().with_rezero(5.0))).unwrap();
    assert!(!c.series()[0].transform.shares_with(&c.axes.y.transform));
    assert!(c.series()[0].transform.shares_with(&own));

    c.set_transform(AxisRole::Y, TransformConfig::default().with_rescale(Rescale::Log));
    assert_eq!(c.series()[0].transform.get().rescale, Rescale::Linear);

    let shared = c.set_slot_transform(AxisRole::Y, 0, None).unwrap();
    assert!(shared.shares_with(&c.axes.y.transform));
    assert!(c.series()[0].transform.shares_with(&c.axes.y.transform));
}

#[test]
fn config_applies_with_one_redraw() {
    let mut c = Chart::new();
    c.register_tables(vec![run("run_a", &["model_number", "star_age", "mass", "log_L"], 11)]);
    let before = c.redraw_count();
    let json = r#"{
        "width": 800,
        "height": 500,
        "axes": [
            { "role": "x", "column": "model_number" },
            { "role": "y", "column": "log_L", "scale": "linear", "transform": { "rescale": "linear" } },
            { "role": "yOther", "column": "mass", "min": 0, "max": 50, "marker_interval": 2, "label": "M" }
        ]
    }"#;
    let cfg: ExplorerConfig = serde_json::from_str(json).unwrap();
    let frame = cfg.apply(&mut c).unwrap();
    assert_eq!(c.redraw_count(), before + 1);
    assert_eq!(c.geometry.width, 800.0);
    assert_eq!(c.axes.y.kind, ScaleKind::Linear);
    assert_eq!(c.axes.y.transform.get().rescale, Rescale::Linear);
    assert_eq!(c.axes.y_other.min, Some(0.0));
    assert_eq!(c.marker_interval(AxisRole::YOther), 2);
    assert_eq!(frame.axis(AxisRole::YOther).unwrap().label, "M");
    assert_eq!(frame.axis(AxisRole::YOther).unwrap().pixel_range, (500.0 - 40.0, 10.0));
}

#[test]
fn empty_file_set_renders_no_series() {
    let mut c = bound_chart();
    let frame = c.register_tables(Vec::new()).unwrap();
    assert!(frame.series.is_empty());
    assert!(c.series().is_empty());
}

#[test]
fn extreme_values_still_render() {
    let rows = vec![vec![1.0, -1e308], vec![2.0, 1e308], vec![3.0, 0.0]];
    let t = Table::from_columns("extreme", vec!["model_number".into(), "star_age".into()], rows).unwrap();
    let mut c = Chart::new();
    c.register_tables(vec![Rc::new(t)]);
    c.assign_axis_column(AxisRole::X, "model_number");
    c.assign_axis_column(AxisRole::Y, "star_age");
    let frame = c.update_plot().unwrap();
    let (lo, hi) = frame.axis(AxisRole::Y).unwrap().domain;
    assert!(lo.is_finite() && hi.is_finite());
    assert_eq!(frame.series[0].line.len(), 3);
}
