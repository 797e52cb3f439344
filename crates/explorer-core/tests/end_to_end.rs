// File: crates/explorer-core/tests/end_to_end.rs
// Purpose: MESA history text -> bound axes -> domains, frame, gestures and tooltip text.

use std::rc::Rc;

use explorer_core::axis::{AxisRole, ScaleKind};
use explorer_core::chart::Chart;
use explorer_core::domain::{max_data, min_data};
use explorer_core::format::format_value;
use explorer_core::geometry::PixelPoint;
use explorer_core::table::Table;
use explorer_core::view::{Interaction, Tool};

const HISTORY: &str = "\
1 2
version_number initial_mass
\"r24.03.1\" 1.0

1 2 3
model_number star_age log_L
1 0.0 0.0
2 1.0e3 0.5
3 2.0e3 1.0
4 4.0e3 1.5
5 8.0e3 2.0
";

fn loaded() -> Chart {
    let t = Rc::new(Table::parse_mesa("history.data", HISTORY).unwrap());
    let mut c = Chart::new();
    c.register_tables(vec![t]);
    c
}

#[test]
fn model_number_domain_is_padded() {
    let mut c = loaded();
    c.assign_axis_column(AxisRole::X, "model_number");
    assert_eq!(c.axes.x.kind, ScaleKind::Linear);
    let data = c.data_set();
    assert!((min_data(data, AxisRole::X) - 0.8).abs() < 1e-9);
    assert!((max_data(data, AxisRole::X) - 5.2).abs() < 1e-9);
    let (lo, hi) = c.axes.x.scale.unwrap().domain();
    assert!((lo - 0.8).abs() < 1e-9 && (hi - 5.2).abs() < 1e-9);
}

#[test]
fn log_column_plots_on_a_log_axis() {
    let mut c = loaded();
    c.assign_axis_column(AxisRole::X, "model_number");
    c.assign_axis_column(AxisRole::Y, "log_L");
    assert_eq!(c.axes.y.kind, ScaleKind::Log10);
    let data = c.data_set();
    assert!((min_data(data, AxisRole::Y) - 10f64.powf(-0.1)).abs() < 1e-9);
    assert!((max_data(data, AxisRole::Y) - 10f64.powf(2.1)).abs() < 1e-6);

    let frame = c.update_plot().unwrap();
    let s = &frame.series[0];
    assert_eq!(s.name, "L");
    assert_eq!(s.line.len(), 5);
    // equal steps in log_L land on equally spaced pixel rows
    let dy: Vec<f64> = s.line.windows(2).map(|w| w[1].1 - w[0].1).collect();
    assert!(dy.iter().all(|d| (d - dy[0]).abs() < 1e-9));
    let y = frame.axis(AxisRole::Y).unwrap();
    assert_eq!(y.label, "L");
    assert_eq!(y.pixel_range, (600.0, 10.0));
}

#[test]
fn pan_then_reset_returns_to_auto_extent() {
    let mut c = loaded();
    c.assign_axis_column(AxisRole::X, "model_number");
    c.assign_axis_column(AxisRole::Y, "star_age");
    let auto = c.axes.y.scale.unwrap().domain();

    let mut ix = Interaction::new();
    ix.select_tool(&mut c, Tool::Pan);
    ix.pointer_down(PixelPoint::new(500.0, 300.0));
    ix.pointer_move(&mut c, PixelPoint::new(450.0, 350.0));
    ix.pointer_up(&mut c, PixelPoint::new(450.0, 350.0));
    assert!(c.axes.x.min.unwrap() > 0.8);
    assert!(c.axes.y.max.unwrap() > auto.1);

    ix.select_tool(&mut c, Tool::ResetView);
    assert_eq!(c.axes.y.scale.unwrap().domain(), auto);
    ix.select_tool(&mut c, Tool::Inspector);
    assert_eq!(ix.tool.cursor(), "crosshair");
}

#[test]
fn tooltip_number_formats() {
    assert_eq!(format_value(12345.678), "1.235e+4");
    assert_eq!(format_value(0.04321), "0.04321");
    assert_eq!(format_value(-12345.678), "-1.235e+4");
    assert_eq!(format_value(0.0005), "5.000e-4");
    assert_eq!(format_value(42.0), "42");
    assert_eq!(format_value(3.14159), "3.142");
}
