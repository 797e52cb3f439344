// File: crates/explorer-core/src/chart.rs
// Summary: Explicit state container (axes, tables, series slots, realized series) with the pause flag,
//          redraw pipeline and the frames handed to rendering.
// Notes:
// - Scales and domains are rebuilt from current state on every redraw, so a redraw always
//   reflects the latest writes.
// - While paused, redraw requests are dropped; callers batch several writes and redraw once.

use std::rc::Rc;

use crate::accessor::{series_accessor, Dim, TransformHandle};
use crate::axis::{AxisRole, Axes, ScaleKind};
use crate::domain::{self, DataSet, Extent};
use crate::downsample::reduced_indices;
use crate::format::clean_column_name;
use crate::listener::ChartListener;
use crate::scale::{build_scale, Scale};
use crate::series::{Series, SeriesId, SeriesSlot, SeriesStyle};
use crate::table::{common_columns, likely_log, Table};
use crate::transform::{Rescale, TransformConfig};
use crate::types::PlotGeometry;

/// Realized axis, as the renderer needs it for spines, ticks and labels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisFrame {
    pub role: AxisRole,
    pub kind: ScaleKind,
    pub pixel_range: (f64, f64),
    pub domain: (f64, f64),
    pub label: String,
    pub color: String,
}

/// One visible series in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesFrame {
    pub id: SeriesId,
    pub name: String,
    pub target: AxisRole,
    pub style: SeriesStyle,
    /// Full resolution; points that do not map to a finite pixel are dropped.
    pub line: Vec<(f64, f64)>,
    /// Thinned by marker interval and current extents. Empty when markers are off.
    pub markers: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub axes: Vec<AxisFrame>,
    pub series: Vec<SeriesFrame>,
}

impl Frame {
    pub fn axis(&self, role: AxisRole) -> Option<&AxisFrame> { self.axes.iter().find(|a| a.role == role) }
}

pub struct Chart {
    pub axes: Axes,
    pub geometry: PlotGeometry,
    tables: Vec<Rc<Table>>,
    y_slots: Vec<SeriesSlot>,
    y_other_slots: Vec<SeriesSlot>,
    series: Vec<Series>,
    marker_interval: (usize, usize),
    paused: bool,
    redraws: u64,
    listeners: Vec<Box<dyn ChartListener>>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl std::fmt::Debug for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("axes", &self.axes)
            .field("tables", &self.tables.len())
            .field("series", &self.series.len())
            .field("paused", &self.paused)
            .field("redraws", &self.redraws)
            .finish()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            axes: Axes::default(),
            geometry: PlotGeometry::default(),
            tables: Vec::new(),
            y_slots: Vec::new(),
            y_other_slots: Vec::new(),
            series: Vec::new(),
            marker_interval: (1, 1),
            paused: false,
            redraws: 0,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn ChartListener>) { self.listeners.push(listener); }

    pub fn data_set(&self) -> DataSet<'_> { DataSet::new(&self.axes, &self.series, &self.tables) }
    pub fn tables(&self) -> &[Rc<Table>] { &self.tables }
    pub fn series(&self) -> &[Series] { &self.series }
    pub fn redraw_count(&self) -> u64 { self.redraws }

    /// More than one file is active; the second y axis is hidden in this mode.
    pub fn is_multi_file(&self) -> bool { self.tables.len() > 1 }

    // ---- pause flag ---------------------------------------------------------

    pub fn is_paused(&self) -> bool { self.paused }

    /// Set the pause flag, returning its previous value.
    pub fn pause(&mut self) -> bool { std::mem::replace(&mut self.paused, true) }

    pub fn resume(&mut self) { self.paused = false; }

    /// Run `f` with redraws suppressed, then restore the previous flag. Does not redraw.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let was = self.pause();
        let out = f(self);
        self.paused = was;
        out
    }

    // ---- series slots -------------------------------------------------------

    pub fn slots(&self, role: AxisRole) -> &[SeriesSlot] {
        match role {
            AxisRole::Y => &self.y_slots,
            AxisRole::YOther => &self.y_other_slots,
            AxisRole::X => &[],
        }
    }

    fn slots_mut(&mut self, role: AxisRole) -> Option<&mut Vec<SeriesSlot>> {
        match role {
            AxisRole::Y => Some(&mut self.y_slots),
            AxisRole::YOther => Some(&mut self.y_other_slots),
            AxisRole::X => None,
        }
    }

    /// Append an empty slot on a y-like axis; returns its index.
    pub fn add_series_slot(&mut self, role: AxisRole) -> Option<usize> {
        let slots = self.slots_mut(role)?;
        slots.push(SeriesSlot::new());
        Some(slots.len() - 1)
    }

    /// Point slot `index` at `column`. Slot 0 also binds the axis itself.
    pub fn assign_series_column(&mut self, role: AxisRole, index: usize, column: impl Into<String>) {
        let column = column.into();
        let Some(slot) = self.slots_mut(role).and_then(|s| s.get_mut(index)) else {
            log::warn!("no series slot {index} on axis {role}");
            return;
        };
        slot.column = Some(column.clone());
        slot.label = clean_column_name(&column);
        if index == 0 {
            let axis = self.axes.get_mut(role);
            if axis.label.is_empty() { axis.label = clean_column_name(&column); }
            axis.column = Some(column);
        }
        self.rebuild_series();
        self.update_plot();
    }

    pub fn remove_series_slot(&mut self, role: AxisRole, index: usize) {
        let Some(slots) = self.slots_mut(role) else { return };
        if index >= slots.len() {
            log::warn!("no series slot {index} on axis {role}");
            return;
        }
        slots.remove(index);
        let first = slots.first().and_then(|s| s.column.clone());
        if first.is_some() { self.axes.get_mut(role).column = first; }
        self.rebuild_series();
        self.update_plot();
    }

    pub fn set_slot_style(&mut self, role: AxisRole, index: usize, show_line: bool, show_markers: bool) {
        if let Some(slot) = self.slots_mut(role).and_then(|s| s.get_mut(index)) {
            slot.show_line = show_line;
            slot.show_markers = show_markers;
        }
        self.rebuild_series();
        self.update_plot();
    }

    /// Give slot `index` its own transform (`Some`) or share the axis transform again (`None`).
    /// Returns the handle the slot now reads through.
    pub fn set_slot_transform(&mut self, role: AxisRole, index: usize, config: Option<TransformConfig>) -> Option<TransformHandle> {
        let axis_handle = self.axes.get(role).transform.clone();
        let slot = self.slots_mut(role)?.get_mut(index)?;
        slot.transform = config.map(TransformHandle::new);
        let handle = slot.transform.clone().unwrap_or(axis_handle);
        self.rebuild_series();
        self.update_plot();
        Some(handle)
    }

    // ---- axis mutations -----------------------------------------------------

    /// Bind `column` to an axis. A log-hinted column switches the axis to a log scale and
    /// exponentiates the stored values; anything else resets both to linear.
    pub fn assign_axis_column(&mut self, role: AxisRole, column: impl Into<String>) {
        let column = column.into();
        let hint = self
            .tables
            .first()
            .and_then(|t| t.column(&column))
            .map(|c| c.log_hint)
            .unwrap_or_else(|| likely_log(&column));
        self.batch(|chart| {
            let axis = chart.axes.get_mut(role);
            axis.column = Some(column.clone());
            axis.label = clean_column_name(&column);
            axis.kind = if hint { ScaleKind::Log10 } else { ScaleKind::Linear };
            axis.transform.update(|t| t.rescale = if hint { Rescale::Exp } else { Rescale::Linear });
            if let Some(slots) = chart.slots_mut(role) {
                if slots.is_empty() { slots.push(SeriesSlot::new()); }
                slots[0].column = Some(column.clone());
                slots[0].label = clean_column_name(&column);
            }
        });
        self.rebuild_series();
        self.update_plot();
    }

    pub fn set_scale_kind(&mut self, role: AxisRole, kind: ScaleKind) {
        self.axes.get_mut(role).kind = kind;
        self.update_plot();
    }

    /// Replace the axis transform in place; every accessor sharing it sees the change.
    pub fn set_transform(&mut self, role: AxisRole, config: TransformConfig) {
        self.axes.get_mut(role).transform.set(config);
        self.update_plot();
    }

    /// Manual limit edit. `None` returns that bound to auto.
    pub fn set_limits(&mut self, role: AxisRole, min: Option<f64>, max: Option<f64>) {
        self.commit_limits(role, min, max);
        self.update_plot();
    }

    pub fn marker_interval(&self, role: AxisRole) -> usize {
        match role {
            AxisRole::YOther => self.marker_interval.1,
            _ => self.marker_interval.0,
        }
    }

    /// Clamped to at least 1.
    pub fn set_marker_interval(&mut self, role: AxisRole, every: usize) {
        let every = every.max(1);
        match role {
            AxisRole::YOther => self.marker_interval.1 = every,
            _ => self.marker_interval.0 = every,
        }
        self.update_plot();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.geometry = PlotGeometry::new(width, height);
        self.update_plot();
    }

    /// Write limits and mirror them to listeners. No redraw.
    pub(crate) fn commit_limits(&mut self, role: AxisRole, min: Option<f64>, max: Option<f64>) {
        let axis = self.axes.get_mut(role);
        axis.min = min;
        axis.max = max;
        for l in self.listeners.iter_mut() {
            l.limits_changed(role, min, max);
        }
    }

    // ---- file set -----------------------------------------------------------

    /// Replace the active tables. Axes bound to a column that is not present in every
    /// table are unbound; series are rebuilt; one redraw follows.
    pub fn register_tables(&mut self, tables: Vec<Rc<Table>>) -> Option<Frame> {
        self.tables = tables;
        if self.tables.is_empty() {
            self.series.clear();
            return self.update_plot();
        }
        let common = common_columns(&self.tables);
        let multi = self.is_multi_file();
        self.batch(|chart| {
            for role in AxisRole::ALL {
                // the hidden second y axis keeps its state in multi-file mode
                if multi && role == AxisRole::YOther { continue; }
                let axis = chart.axes.get_mut(role);
                if let Some(col) = axis.column.as_deref() {
                    if !common.iter().any(|c| c == col) {
                        log::debug!("axis {role}: column '{col}' not in every file; unbinding");
                        axis.unbind();
                        chart.commit_limits(role, None, None);
                    }
                }
            }
            if chart.y_slots.is_empty() { chart.y_slots.push(SeriesSlot::new()); }
            if !multi && chart.y_other_slots.is_empty() { chart.y_other_slots.push(SeriesSlot::new()); }
        });
        self.rebuild_series();
        self.update_plot()
    }

    fn rebuild_series(&mut self) {
        let common = common_columns(&self.tables);
        let multi = self.is_multi_file();
        let x_column = self.axes.x.column.clone();
        let mut out = Vec::new();
        for role in AxisRole::Y_LIKE {
            if multi && role == AxisRole::YOther { continue; }
            let axis_handle = self.axes.get(role).transform.clone();
            for (slot_index, slot) in self.slots(role).iter().enumerate() {
                let Some(column) = slot.column.as_deref() else { continue };
                if !common.iter().any(|c| c == column) { continue; }
                for (file_index, table) in self.tables.iter().enumerate() {
                    let mut name = if slot.label.is_empty() { column.replace('_', " ") } else { slot.label.clone() };
                    if multi { name = format!("{name} ({})", table.name); }
                    let style = SeriesStyle {
                        show_line: slot.show_line,
                        show_markers: slot.show_markers,
                        ..SeriesStyle::for_slot(role, slot_index)
                    };
                    let transform = slot.transform.clone().unwrap_or_else(|| axis_handle.clone());
                    let series = Series::new(
                        SeriesId::new(&table.name, role, slot_index, file_index),
                        Rc::clone(table),
                        role,
                        x_column.clone(),
                        Some(column.to_string()),
                        transform,
                    )
                    .with_name(name)
                    .with_style(style);
                    out.push(series);
                }
            }
        }
        log::debug!("rebuilt {} series from {} tables", out.len(), self.tables.len());
        self.series = out;
    }

    // ---- redraw -------------------------------------------------------------

    /// Rebuild every scale from current state.
    pub fn make_scales(&mut self) {
        let data = self.data_set();
        let has_y = data.is_bound(AxisRole::Y);
        let has_y_other = data.is_bound(AxisRole::YOther);
        let scales: Vec<(AxisRole, Option<Scale>)> = AxisRole::ALL
            .iter()
            .map(|&role| (role, build_scale(data, role, self.geometry.pixel_range(role, has_y, has_y_other))))
            .collect();
        for (role, scale) in scales {
            self.axes.get_mut(role).scale = scale;
        }
    }

    /// Redraw request. Dropped while paused; otherwise rebuilds scales, builds a frame,
    /// hands it to listeners and returns it.
    pub fn update_plot(&mut self) -> Option<Frame> {
        if self.paused {
            log::debug!("redraw skipped: paused");
            return None;
        }
        self.make_scales();
        self.redraws += 1;
        let frame = self.build_frame();
        log::debug!("redraw #{}: {} axes, {} series", self.redraws, frame.axes.len(), frame.series.len());
        for l in self.listeners.iter_mut() {
            l.redrawn(&frame);
        }
        Some(frame)
    }

    fn build_frame(&self) -> Frame {
        let mut frame = Frame::default();
        for axis in self.axes.iter() {
            let Some(scale) = axis.scale else { continue };
            frame.axes.push(AxisFrame {
                role: axis.role,
                kind: scale.kind(),
                pixel_range: scale.range(),
                domain: scale.domain(),
                label: crate::format::axis_label(axis),
                color: axis.color.clone(),
            });
        }
        let Some(x_scale) = self.axes.x.scale else { return frame };
        let data = self.data_set();
        let x_extent = domain::extent(data, AxisRole::X);
        let mut y_extents: Vec<(AxisRole, Extent)> = Vec::new();
        for s in &self.series {
            let Some(y_scale) = self.axes.get(s.target).scale else { continue };
            let x = series_accessor(s, &self.axes.x, Dim::X);
            let y = series_accessor(s, &self.axes.x, Dim::Y);
            let to_px = |i: usize| {
                let row = &s.rows()[i];
                (x_scale.forward(x.value(row)), y_scale.forward(y.value(row)))
            };
            let line = if s.style.show_line {
                (0..s.rows().len()).map(&to_px).filter(|(px, py)| px.is_finite() && py.is_finite()).collect()
            } else {
                Vec::new()
            };
            let markers = if s.style.show_markers {
                let y_extent = match y_extents.iter().find(|(r, _)| *r == s.target) {
                    Some((_, e)) => *e,
                    None => {
                        let e = domain::extent(data, s.target);
                        y_extents.push((s.target, e));
                        e
                    }
                };
                reduced_indices(s.rows(), &x, &y, x_extent, y_extent, self.marker_interval(s.target))
                    .into_iter()
                    .map(&to_px)
                    .filter(|(px, py)| px.is_finite() && py.is_finite())
                    .collect()
            } else {
                Vec::new()
            };
            frame.series.push(SeriesFrame {
                id: s.id.clone(),
                name: s.name.clone(),
                target: s.target,
                style: s.style.clone(),
                line,
                markers,
            });
        }
        frame
    }
}
