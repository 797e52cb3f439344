// File: crates/explorer-core/src/axis.rs
// Summary: Axis model: role, column binding, scale kind, limit overrides and live transform.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::accessor::TransformHandle;
use crate::scale::Scale;

/// The three chart axes. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisRole {
    X,
    Y,
    YOther,
}

impl AxisRole {
    pub const ALL: [AxisRole; 3] = [AxisRole::X, AxisRole::Y, AxisRole::YOther];
    pub const Y_LIKE: [AxisRole; 2] = [AxisRole::Y, AxisRole::YOther];

    pub const fn as_str(self) -> &'static str {
        match self {
            AxisRole::X => "x",
            AxisRole::Y => "y",
            AxisRole::YOther => "yOther",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    #[serde(alias = "log", alias = "logarithmic")]
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub role: AxisRole,
    /// Display label; empty means "derive from the column name".
    pub label: String,
    /// Bound column; `None` means no data assigned and nothing is rendered.
    pub column: Option<String>,
    pub kind: ScaleKind,
    /// User overrides. `None` bounds are auto-computed.
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub transform: TransformHandle,
    /// Rebuilt on every redraw; `None` while the axis is unbound.
    pub scale: Option<Scale>,
    pub color: String,
    /// Data value under the pointer from the last inspector pass.
    pub pointer_value: Option<f64>,
}

impl Axis {
    pub fn new(role: AxisRole) -> Self {
        let color = match role {
            AxisRole::X => "Black",
            AxisRole::Y => "#1f77b4",
            AxisRole::YOther => "#ff7f0e",
        };
        Self {
            role,
            label: String::new(),
            column: None,
            kind: ScaleKind::Linear,
            min: None,
            max: None,
            transform: TransformHandle::default(),
            scale: None,
            color: color.to_string(),
            pointer_value: None,
        }
    }

    pub fn is_bound(&self) -> bool { self.column.is_some() }

    pub fn clear_limits(&mut self) {
        self.min = None;
        self.max = None;
    }

    /// Drop the column binding and everything derived from it.
    pub fn unbind(&mut self) {
        self.column = None;
        self.label.clear();
        self.scale = None;
        self.pointer_value = None;
        self.clear_limits();
    }
}

/// The three axes, addressable by role.
#[derive(Clone, Debug)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
    pub y_other: Axis,
}

impl Default for Axes {
    fn default() -> Self {
        Self { x: Axis::new(AxisRole::X), y: Axis::new(AxisRole::Y), y_other: Axis::new(AxisRole::YOther) }
    }
}

impl Axes {
    pub fn get(&self, role: AxisRole) -> &Axis {
        match role {
            AxisRole::X => &self.x,
            AxisRole::Y => &self.y,
            AxisRole::YOther => &self.y_other,
        }
    }

    pub fn get_mut(&mut self, role: AxisRole) -> &mut Axis {
        match role {
            AxisRole::X => &mut self.x,
            AxisRole::Y => &mut self.y,
            AxisRole::YOther => &mut self.y_other,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        [&self.x, &self.y, &self.y_other].into_iter()
    }
}
