// File: crates/explorer-core/src/series.rs
// Summary: Series model (one plotted trace) and the per-axis series slots the UI edits.
// Notes:
// - A series shares its table with every other series built from the same file; rows are never mutated.
// - Style is a plain record owned by the styling collaborator; the core only carries it through to frames.

use std::rc::Rc;

use crate::accessor::TransformHandle;
use crate::axis::AxisRole;
use crate::table::{Row, Table};

/// Tableau10, the default color cycle.
pub const TABLEAU10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Stable identifier used to correlate UI state across rebuilds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeriesId(pub String);

impl SeriesId {
    pub fn new(file: &str, target: AxisRole, slot: usize, file_index: usize) -> Self {
        Self(format!("{file}_{target}_{slot}_{file_index}"))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
    Star,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: String,
    pub line_width: f64,
    pub marker_size: f64,
    pub marker_shape: MarkerShape,
    pub opacity: f64,
    pub show_line: bool,
    pub show_markers: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: TABLEAU10[0].to_string(),
            line_width: 2.0,
            marker_size: 6.0,
            marker_shape: MarkerShape::Circle,
            opacity: 1.0,
            show_line: true,
            show_markers: false,
        }
    }
}

impl SeriesStyle {
    /// Default style for slot `slot` on `target`: left axis starts at blue, right axis at orange.
    pub fn for_slot(target: AxisRole, slot: usize) -> Self {
        let offset = if target == AxisRole::YOther { 1 } else { 0 };
        Self { color: TABLEAU10[(slot + offset) % TABLEAU10.len()].to_string(), ..Self::default() }
    }
}

/// A series slot as defined in the controls: which column to plot on a y-like axis.
#[derive(Clone, Debug, Default)]
pub struct SeriesSlot {
    pub column: Option<String>,
    pub label: String,
    pub show_line: bool,
    pub show_markers: bool,
    /// Own transform; `None` shares the target axis's transform.
    pub transform: Option<TransformHandle>,
}

impl SeriesSlot {
    pub fn new() -> Self {
        Self { show_line: true, ..Self::default() }
    }
}

/// One plotted trace.
#[derive(Clone, Debug)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    pub table: Rc<Table>,
    pub target: AxisRole,
    pub x_column: Option<String>,
    pub y_column: Option<String>,
    pub transform: TransformHandle,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(
        id: SeriesId,
        table: Rc<Table>,
        target: AxisRole,
        x_column: Option<String>,
        y_column: Option<String>,
        transform: TransformHandle,
    ) -> Self {
        let name = y_column.as_deref().map(|c| c.replace('_', " ")).unwrap_or_default();
        Self { id, name, table, target, x_column, y_column, transform, style: SeriesStyle::for_slot(target, 0) }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rows(&self) -> &[Row] { self.table.rows() }
}
