// File: crates/explorer-core/src/scale.rs
// Summary: Linear and log10 pixel<->data scales, rebuilt from the domain calculator on every redraw.

use crate::axis::{AxisRole, ScaleKind};
use crate::domain::{self, DataSet};

/// Data value (after transforms).
pub type Value = f64;
/// Pixel coordinate in plot space.
pub type Pixel = f64;

/// Mapping between a data domain and a pixel range. The range may run either way
/// (y-like axes go bottom -> top, so larger values get smaller pixel y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    kind: ScaleKind,
    domain: (Value, Value),
    range: (Pixel, Pixel),
    // domain endpoints in the space the interpolation runs in (log10 for log scales)
    t0: f64,
    t1: f64,
}

impl Scale {
    pub fn new(kind: ScaleKind, domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        match kind {
            ScaleKind::Linear => Self::linear(domain, range),
            ScaleKind::Log10 => Self::log10(domain, range),
        }
    }

    pub fn linear(domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { kind: ScaleKind::Linear, domain: (d0, d1), range, t0: d0, t1: d1 }
    }

    /// Log scale. Non-positive bounds are repaired rather than producing NaN endpoints:
    /// a bad lower bound becomes a decade below the upper one, two bad bounds become [1, 10].
    pub fn log10(domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        let (mut d0, mut d1) = domain;
        if !(d0 > 0.0) && !(d1 > 0.0) {
            log::warn!("log scale over non-positive domain [{d0}, {d1}]; using [1, 10]");
            d0 = 1.0;
            d1 = 10.0;
        } else if !(d0 > 0.0) {
            d0 = d1 / 10.0;
        } else if !(d1 > 0.0) {
            d1 = d0 * 10.0;
        }
        let t0 = d0.log10();
        let mut t1 = d1.log10();
        if (t1 - t0).abs() < 1e-12 {
            t1 = t0 + 1.0;
            d1 = 10f64.powf(t1);
        }
        Self { kind: ScaleKind::Log10, domain: (d0, d1), range, t0, t1 }
    }

    pub fn kind(&self) -> ScaleKind { self.kind }
    pub fn domain(&self) -> (Value, Value) { self.domain }
    pub fn range(&self) -> (Pixel, Pixel) { self.range }

    /// Data -> pixel. Non-positive values have no position on a log scale and map to NaN.
    #[inline]
    pub fn forward(&self, v: Value) -> Pixel {
        let t = match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => if v > 0.0 { v.log10() } else { return f64::NAN },
        };
        // halved differences stay finite across the whole f64 range
        let frac = (t * 0.5 - self.t0 * 0.5) / (self.t1 * 0.5 - self.t0 * 0.5);
        self.range.0 + frac * (self.range.1 - self.range.0)
    }

    /// Pixel -> data.
    #[inline]
    pub fn inverse(&self, px: Pixel) -> Value {
        let span = self.range.1 - self.range.0;
        let frac = if span == 0.0 { 0.0 } else { (px - self.range.0) / span };
        let t = self.t0 * (1.0 - frac) + self.t1 * frac;
        match self.kind {
            ScaleKind::Linear => t,
            ScaleKind::Log10 => 10f64.powf(t),
        }
    }
}

/// Build the scale for `role` from current state: domain from the calculator, the given pixel range.
/// `None` when the axis has nothing bound to it.
pub fn build_scale(data: DataSet<'_>, role: AxisRole, pixel_range: (Pixel, Pixel)) -> Option<Scale> {
    if !data.is_bound(role) { return None; }
    let axis = data.axes.get(role);
    let extent = domain::extent(data, role);
    Some(Scale::new(axis.kind, (extent.min, extent.max), pixel_range))
}
