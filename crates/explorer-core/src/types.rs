// File: crates/explorer-core/src/types.rs
// Summary: Plot geometry: surface size, layout breakpoints, tick padding and the per-axis pixel spans.

use serde::{Deserialize, Serialize};

use crate::axis::AxisRole;

/// Default surface width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 640.0;
/// Gap left on a side that has no tick labels.
pub const EDGE_MARGIN: f64 = 10.0;

/// Layout size class, chosen from the surface width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        match width {
            w if w >= 1400.0 => Breakpoint::Xxl,
            w if w >= 1200.0 => Breakpoint::Xl,
            w if w >= 992.0 => Breakpoint::Lg,
            w if w >= 768.0 => Breakpoint::Md,
            w if w >= 576.0 => Breakpoint::Sm,
            _ => Breakpoint::Xs,
        }
    }

    /// Room reserved under the plot for x tick labels.
    pub const fn x_tick_padding(self) -> f64 {
        match self {
            Breakpoint::Xs => 40.0,
            Breakpoint::Sm => 35.0,
            Breakpoint::Md | Breakpoint::Lg => 40.0,
            Breakpoint::Xl => 50.0,
            Breakpoint::Xxl => 60.0,
        }
    }

    /// Room reserved beside the plot for y tick labels.
    pub const fn y_tick_padding(self) -> f64 {
        match self {
            Breakpoint::Xs => 60.0,
            Breakpoint::Sm => 50.0,
            Breakpoint::Md | Breakpoint::Lg => 60.0,
            Breakpoint::Xl => 70.0,
            Breakpoint::Xxl => 90.0,
        }
    }
}

/// Surface size plus the breakpoint the tick padding is read from.
/// Contract: width and height are positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub breakpoint: Breakpoint,
}

impl Default for PlotGeometry {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}

impl PlotGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, breakpoint: Breakpoint::from_width(width) }
    }

    /// Pixel span for `role`, first endpoint = data minimum.
    /// x runs left -> right and leaves label room only on sides that carry a y axis;
    /// y-like axes run bottom -> top.
    pub fn pixel_range(&self, role: AxisRole, has_y: bool, has_y_other: bool) -> (f64, f64) {
        let bp = self.breakpoint;
        match role {
            AxisRole::X => {
                let left = if has_y { bp.y_tick_padding() } else { EDGE_MARGIN };
                let right = if has_y_other { self.width - bp.y_tick_padding() } else { self.width - EDGE_MARGIN };
                (left, right)
            }
            AxisRole::Y | AxisRole::YOther => (self.height - bp.x_tick_padding(), EDGE_MARGIN),
        }
    }
}
