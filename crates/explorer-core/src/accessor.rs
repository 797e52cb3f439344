// File: crates/explorer-core/src/accessor.rs
// Summary: Accessor factory: per-axis and per-series value extraction through a live transform config.
// Notes:
// - Accessors hold a shared handle to the config, never a copy, so edits made after
//   construction are visible on the next call.

use std::cell::RefCell;
use std::rc::Rc;

use crate::axis::Axis;
use crate::series::Series;
use crate::table::Row;
use crate::transform::TransformConfig;

/// Shared, mutable transform configuration.
#[derive(Clone, Debug, Default)]
pub struct TransformHandle(Rc<RefCell<TransformConfig>>);

impl TransformHandle {
    pub fn new(config: TransformConfig) -> Self { Self(Rc::new(RefCell::new(config))) }

    /// Snapshot of the current values.
    pub fn get(&self) -> TransformConfig { *self.0.borrow() }
    pub fn set(&self, config: TransformConfig) { *self.0.borrow_mut() = config; }
    pub fn update(&self, f: impl FnOnce(&mut TransformConfig)) { f(&mut self.0.borrow_mut()); }

    /// Both handles point at the same config.
    pub fn shares_with(&self, other: &TransformHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    /// New independent handle starting from the current values.
    pub fn detach(&self) -> TransformHandle { TransformHandle::new(self.get()) }
}

/// Callable `(row) -> value` bound to a column and a live transform.
#[derive(Clone, Debug)]
pub struct Accessor {
    transform: TransformHandle,
    column: Option<String>,
}

impl Accessor {
    pub fn column(&self) -> Option<&str> { self.column.as_deref() }

    /// Transformed value, or NaN when the column is unset/absent or the cell is missing.
    #[inline]
    pub fn value(&self, row: &Row) -> f64 {
        let Some(col) = self.column.as_deref() else { return f64::NAN };
        match row.get(col) {
            Some(raw) if !raw.is_nan() => {
                let cfg = self.transform.get();
                if cfg.is_identity() { raw } else { cfg.apply(raw) }
            }
            _ => f64::NAN,
        }
    }
}

/// Accessor reading `column` through `transform`.
pub fn make_accessor(transform: &TransformHandle, column: impl Into<String>) -> Accessor {
    Accessor { transform: transform.clone(), column: Some(column.into()) }
}

/// Accessor for an axis's own column binding.
pub fn axis_accessor(axis: &Axis) -> Accessor {
    Accessor { transform: axis.transform.clone(), column: axis.column.clone() }
}

/// Which of a series' two columns to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim {
    X,
    Y,
}

/// Accessor bound to a series' own column mapping. The x column goes through the
/// x axis transform; the y column through the series transform.
pub fn series_accessor(series: &Series, x_axis: &Axis, dim: Dim) -> Accessor {
    match dim {
        Dim::X => Accessor { transform: x_axis.transform.clone(), column: series.x_column.clone() },
        Dim::Y => Accessor { transform: series.transform.clone(), column: series.y_column.clone() },
    }
}

/// Pixel -> data lookup through the axis's current scale. `None` for an axis without one.
pub fn make_inverse(axis: &Axis) -> Option<impl Fn(f64) -> f64> {
    let scale = axis.scale?;
    Some(move |px: f64| scale.inverse(px))
}
