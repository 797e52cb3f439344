// File: crates/explorer-core/src/view.rs
// Summary: Interaction state machine: tool selection, drag gestures (pan / box-zoom), inspector tooltip, reset.
// Notes:
// - Every commit writes all of its axes first and then requests exactly one redraw.
// - Guard failures skip the one axis (logged) and never abort the commit.
// - The two y axes share one pixel rectangle; pan moves each by the same fraction of its own
//   range and box-zoom inverts the same pixel rows through each axis's own scale.

use crate::accessor::make_inverse;
use crate::axis::{Axis, AxisRole, ScaleKind};
use crate::chart::{Chart, Frame};
use crate::error::GuardError;
use crate::format::{axis_label, format_value};
use crate::geometry::{PixelPoint, PixelRect};

/// Box-zoom rectangles must exceed this size on both sides to count.
pub const BOX_ZOOM_MIN_PX: f64 = 10.0;
/// Tooltip anchor offset from the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (20.0, 35.0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Inspector,
    Pan,
    BoxZoom,
    /// One-shot command: selecting it resets the view immediately.
    ResetView,
}

impl Tool {
    pub const fn cursor(self) -> &'static str {
        match self {
            Tool::Inspector | Tool::BoxZoom => "crosshair",
            Tool::Pan => "move",
            Tool::ResetView => "pointer",
        }
    }

    pub const fn drags(self) -> bool { matches!(self, Tool::Pan | Tool::BoxZoom) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    /// Tool active at pointer-down; the gesture finishes with it even after a tool switch.
    pub tool: Tool,
    pub start: PixelPoint,
    pub end: PixelPoint,
    pub dragging: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub role: AxisRole,
    pub label: String,
    pub value: f64,
    pub text: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub anchor: PixelPoint,
    pub lines: Vec<TooltipLine>,
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
    pub tool: Tool,
    pub drag: Option<DragGesture>,
    /// Box-zoom overlay.
    pub zoom_rect: Option<PixelRect>,
    /// Visual-only translation of the series graphics while a pan is in flight.
    pub pan_offset: Option<(f64, f64)>,
    pub tooltip: Option<Tooltip>,
    pub pointer: Option<PixelPoint>,
}

impl Interaction {
    pub fn new() -> Self { Self::default() }

    pub fn is_dragging(&self) -> bool { self.drag.map(|d| d.dragging).unwrap_or(false) }

    /// Tool-selection event. An in-flight gesture is left alone.
    pub fn select_tool(&mut self, chart: &mut Chart, tool: Tool) -> Option<Frame> {
        log::debug!("tool {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
        match tool {
            Tool::ResetView => self.reset_view(chart),
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, p: PixelPoint) {
        self.pointer = Some(p);
        if !self.tool.drags() { return; }
        self.drag = Some(DragGesture { tool: self.tool, start: p, end: p, dragging: true });
        if self.tool == Tool::BoxZoom {
            self.zoom_rect = Some(PixelRect::from_corners(p, p));
        }
        log::debug!("{:?} gesture started at ({}, {})", self.tool, p.x, p.y);
    }

    pub fn pointer_move(&mut self, chart: &mut Chart, p: PixelPoint) {
        self.pointer = Some(p);
        if let Some(g) = self.drag.as_mut().filter(|g| g.dragging) {
            g.end = p;
            match g.tool {
                Tool::Pan => self.pan_offset = Some(p.delta_from(g.start)),
                Tool::BoxZoom => self.zoom_rect = Some(PixelRect::from_corners(g.start, p)),
                _ => {}
            }
            return;
        }
        if self.tool == Tool::Inspector {
            self.update_tooltip(chart, p);
        }
    }

    /// Finish a gesture. Returns the redraw frame if one was produced.
    pub fn pointer_up(&mut self, chart: &mut Chart, p: PixelPoint) -> Option<Frame> {
        self.pointer = Some(p);
        let mut gesture = self.drag.take()?;
        if !gesture.dragging { return None; }
        gesture.dragging = false;
        gesture.end = p;
        match gesture.tool {
            Tool::Pan => {
                self.pan_offset = None;
                self.commit_pan(chart, &gesture)
            }
            Tool::BoxZoom => {
                self.zoom_rect = None;
                self.commit_box_zoom(chart, &gesture)
            }
            _ => None,
        }
    }

    /// Pointer left the surface: overlays go away and a pan in flight is still committed.
    pub fn pointer_leave(&mut self, chart: &mut Chart) -> Option<Frame> {
        self.tooltip = None;
        self.zoom_rect = None;
        self.pointer = None;
        let gesture = self.drag.take()?;
        self.pan_offset = None;
        match gesture {
            g @ DragGesture { tool: Tool::Pan, dragging: true, .. } => self.commit_pan(chart, &g),
            _ => None,
        }
    }

    /// Drop every limit override and redraw from auto-extents.
    pub fn reset_view(&mut self, chart: &mut Chart) -> Option<Frame> {
        for role in AxisRole::ALL {
            chart.commit_limits(role, None, None);
        }
        chart.update_plot()
    }

    /// Shift every bound axis by the gesture's displacement, in data units.
    pub fn commit_pan(&mut self, chart: &mut Chart, gesture: &DragGesture) -> Option<Frame> {
        let dy_px = gesture.end.y - gesture.start.y;
        let mut updates = Vec::new();
        for role in AxisRole::ALL {
            match pan_bounds(chart.axes.get(role), gesture, dy_px) {
                Ok(Some(bounds)) => updates.push((role, bounds)),
                Ok(None) => {}
                Err(e) => log::warn!("pan skipped: {e}"),
            }
        }
        for (role, (min, max)) in updates {
            chart.commit_limits(role, Some(min), Some(max));
        }
        chart.update_plot()
    }

    /// Zoom to the dragged rectangle. Rectangles not larger than the threshold on both sides
    /// are treated as clicks.
    pub fn commit_box_zoom(&mut self, chart: &mut Chart, gesture: &DragGesture) -> Option<Frame> {
        let rect = PixelRect::from_corners(gesture.start, gesture.end);
        if rect.width <= BOX_ZOOM_MIN_PX || rect.height <= BOX_ZOOM_MIN_PX {
            log::debug!("box zoom {}x{} px discarded", rect.width, rect.height);
            return None;
        }
        let mut updates = Vec::new();
        for role in AxisRole::ALL {
            match zoom_bounds(chart.axes.get(role), &rect) {
                Ok(Some(bounds)) => updates.push((role, bounds)),
                Ok(None) => {}
                Err(e) => log::warn!("box zoom skipped: {e}"),
            }
        }
        for (role, (min, max)) in updates {
            chart.commit_limits(role, Some(min), Some(max));
        }
        chart.update_plot()
    }

    /// Inspector pass: read each bound axis's value under the pointer and build the tooltip.
    pub fn update_tooltip(&mut self, chart: &mut Chart, p: PixelPoint) {
        let mut lines = Vec::new();
        for role in AxisRole::ALL {
            let axis = chart.axes.get_mut(role);
            let inverse = if axis.is_bound() { make_inverse(axis) } else { None };
            let Some(inverse) = inverse else {
                axis.pointer_value = None;
                continue;
            };
            let px = if role == AxisRole::X { p.x } else { p.y };
            let value = inverse(px);
            axis.pointer_value = Some(value);
            lines.push(TooltipLine {
                role,
                label: axis_label(axis),
                value,
                text: format_value(value),
                color: axis.color.clone(),
            });
        }
        self.tooltip = if lines.is_empty() {
            None
        } else {
            Some(Tooltip { anchor: PixelPoint::new(p.x + TOOLTIP_OFFSET.0, p.y + TOOLTIP_OFFSET.1), lines })
        };
    }
}

impl TooltipLine {
    /// `label: value`, as displayed.
    pub fn display(&self) -> String { format!("{}: {}", self.label, self.text) }
}

/// New limits for one axis after a pan, `None` when the axis takes no part.
fn pan_bounds(axis: &Axis, gesture: &DragGesture, dy_px: f64) -> Result<Option<(f64, f64)>, GuardError> {
    let role = axis.role;
    let Some(scale) = axis.scale.filter(|_| axis.is_bound()) else { return Ok(None) };
    let (d0, d1) = scale.domain();
    let min = axis.min.unwrap_or(d0);
    let max = axis.max.unwrap_or(d1);
    let delta = match role {
        AxisRole::X => scale.inverse(gesture.start.x) - scale.inverse(gesture.end.x),
        AxisRole::Y | AxisRole::YOther => {
            // fraction of this axis's own pixel height, applied to its own range;
            // dragging down brings larger values into view
            let (bottom, top) = scale.range();
            (dy_px / (bottom - top)) * (max - min)
        }
    };
    if !delta.is_finite() {
        return Err(GuardError::NonFiniteDelta { role, delta });
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(GuardError::NonFiniteBounds { role, min, max });
    }
    checked_bounds(axis, min + delta, max + delta).map(Some)
}

/// New limits for one axis from a box-zoom rectangle. Top pixel row is the larger value.
fn zoom_bounds(axis: &Axis, rect: &PixelRect) -> Result<Option<(f64, f64)>, GuardError> {
    let Some(scale) = axis.scale.filter(|_| axis.is_bound()) else { return Ok(None) };
    let (min, max) = match axis.role {
        AxisRole::X => (scale.inverse(rect.left()), scale.inverse(rect.right())),
        AxisRole::Y | AxisRole::YOther => (scale.inverse(rect.bottom()), scale.inverse(rect.top())),
    };
    checked_bounds(axis, min, max).map(Some)
}

fn checked_bounds(axis: &Axis, min: f64, max: f64) -> Result<(f64, f64), GuardError> {
    let role = axis.role;
    if axis.kind == ScaleKind::Log10 && (min <= 0.0 || max <= 0.0) {
        return Err(GuardError::NonPositiveLog { role, min, max });
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(GuardError::NonFiniteBounds { role, min, max });
    }
    Ok((min, max))
}
