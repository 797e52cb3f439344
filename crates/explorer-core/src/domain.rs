// File: crates/explorer-core/src/domain.rs
// Summary: Axis domain calculator: user overrides or padded auto-extent over the applicable series.
// Notes:
// - Recomputed from current state on every call; nothing is cached between redraws.
// - Log padding happens in log10 space so both ends look the same on a log axis.

use std::rc::Rc;

use crate::accessor::{axis_accessor, series_accessor, Dim};
use crate::axis::{AxisRole, Axes, ScaleKind};
use crate::series::Series;
use crate::table::Table;

/// Fraction of the data range added on each side.
pub const PAD_FRACTION: f64 = 0.05;
/// Domain used when there is nothing to measure.
pub const EMPTY_EXTENT: Extent = Extent { min: 0.0, max: 1.0 };
/// Half-width, in decades, of a log domain around a single value.
pub const DEGENERATE_LOG_PAD: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn span(&self) -> f64 { self.max - self.min }
    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Borrowed view of the state the calculator reads.
#[derive(Clone, Copy, Debug)]
pub struct DataSet<'a> {
    pub axes: &'a Axes,
    pub series: &'a [Series],
    /// Active tables; the x axis falls back to these while no series exist.
    pub tables: &'a [Rc<Table>],
}

impl<'a> DataSet<'a> {
    pub fn new(axes: &'a Axes, series: &'a [Series], tables: &'a [Rc<Table>]) -> Self {
        Self { axes, series, tables }
    }

    /// Series that contribute to `role`.
    pub fn applicable(&self, role: AxisRole) -> impl Iterator<Item = &'a Series> + '_ {
        self.series.iter().filter(move |s| match role {
            AxisRole::X => true,
            _ => s.target == role && s.y_column.is_some(),
        })
    }

    /// The x axis needs a column; a y-like axis needs at least one series with a column.
    pub fn is_bound(&self, role: AxisRole) -> bool {
        match role {
            AxisRole::X => self.axes.x.is_bound(),
            _ => self.applicable(role).next().is_some(),
        }
    }
}

/// Every finite transformed value feeding `role`.
pub fn axis_values(data: DataSet<'_>, role: AxisRole) -> Vec<f64> {
    let mut values = Vec::new();
    match role {
        AxisRole::X => {
            if !data.axes.x.is_bound() { return values; }
            let acc = axis_accessor(&data.axes.x);
            // one shared accessor over every distinct table in play
            let mut seen: Vec<&Rc<Table>> = Vec::new();
            let tables = data.series.iter().map(|s| &s.table);
            let sources: Vec<&Rc<Table>> = if data.series.is_empty() { data.tables.iter().collect() } else { tables.collect() };
            for t in sources {
                if seen.iter().any(|s| Rc::ptr_eq(s, t)) { continue; }
                seen.push(t);
                values.extend(t.rows().iter().map(|r| acc.value(r)));
            }
        }
        _ => {
            for s in data.applicable(role) {
                let acc = series_accessor(s, &data.axes.x, Dim::Y);
                values.extend(s.rows().iter().map(|r| acc.value(r)));
            }
        }
    }
    values.retain(|v| v.is_finite());
    values
}

/// Padded extent of `values` for the given scale kind.
pub fn auto_extent(values: &[f64], kind: ScaleKind) -> Extent {
    match kind {
        ScaleKind::Linear => {
            let Some((lo, hi)) = min_max(values.iter().copied()) else { return EMPTY_EXTENT };
            let pad = if hi == lo {
                if lo == 0.0 { 0.5 } else { PAD_FRACTION * lo.abs() }
            } else {
                // halves first: `hi - lo` overflows for data near the f64 limits
                2.0 * PAD_FRACTION * (hi * 0.5 - lo * 0.5)
            };
            finite_or_unpadded(Extent { min: lo - pad, max: hi + pad }, lo, hi, f64::is_finite)
        }
        ScaleKind::Log10 => {
            // non-positive values have no place on a log axis
            let Some((lo, hi)) = min_max(values.iter().copied().filter(|v| *v > 0.0).map(f64::log10)) else {
                return EMPTY_EXTENT;
            };
            let pad = if hi == lo { DEGENERATE_LOG_PAD } else { PAD_FRACTION * (hi - lo) };
            let padded = Extent { min: 10f64.powf(lo - pad), max: 10f64.powf(hi + pad) };
            // powf overflows to inf and underflows to 0 for very wide decade ranges
            finite_or_unpadded(padded, 10f64.powf(lo), 10f64.powf(hi), |v| v.is_finite() && v > 0.0)
        }
    }
}

/// Keep padded bounds that are usable; a bound that overflowed falls back to the data edge.
fn finite_or_unpadded(padded: Extent, lo: f64, hi: f64, usable: fn(f64) -> bool) -> Extent {
    if usable(padded.min) && usable(padded.max) {
        return padded;
    }
    log::warn!("padding [{lo}, {hi}] overflows f64; using unpadded bound");
    Extent {
        min: if usable(padded.min) { padded.min } else { lo },
        max: if usable(padded.max) { padded.max } else { hi },
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Effective domain of `role`: overrides where set, padded auto-extent otherwise.
pub fn extent(data: DataSet<'_>, role: AxisRole) -> Extent {
    let axis = data.axes.get(role);
    if let (Some(min), Some(max)) = (axis.min, axis.max) {
        return Extent { min, max };
    }
    let auto = auto_extent(&axis_values(data, role), axis.kind);
    Extent { min: axis.min.unwrap_or(auto.min), max: axis.max.unwrap_or(auto.max) }
}

pub fn min_data(data: DataSet<'_>, role: AxisRole) -> f64 {
    match data.axes.get(role).min {
        Some(min) => min,
        None => extent(data, role).min,
    }
}

pub fn max_data(data: DataSet<'_>, role: AxisRole) -> f64 {
    match data.axes.get(role).max {
        Some(max) => max,
        None => extent(data, role).max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_extent_ignores_non_positive() {
        let e = auto_extent(&[-5.0, 0.0, 10.0, 1000.0], ScaleKind::Log10);
        assert!(e.min > 1.0 && e.min < 10.0);
        assert!(e.max > 1000.0);
    }

    #[test]
    fn degenerate_linear_extent_has_width() {
        let e = auto_extent(&[4.0, 4.0], ScaleKind::Linear);
        assert!((e.min - 3.8).abs() < 1e-12);
        assert!((e.max - 4.2).abs() < 1e-12);
        let z = auto_extent(&[0.0], ScaleKind::Linear);
        assert_eq!((z.min, z.max), (-0.5, 0.5));
    }

    #[test]
    fn degenerate_log_extent_spans_a_decade() {
        let e = auto_extent(&[100.0], ScaleKind::Log10);
        assert!((e.max.log10() - e.min.log10() - 1.0).abs() < 1e-12);
    }
}
