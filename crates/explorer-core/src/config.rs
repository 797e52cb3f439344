// File: crates/explorer-core/src/config.rs
// Summary: Serializable explorer configuration (plot size, per-axis bindings, scales, transforms, limits).
// Notes:
// - Applied through the same mutation paths as UI events, batched under the pause flag with one redraw.

use serde::{Deserialize, Serialize};

use crate::axis::{AxisRole, ScaleKind};
use crate::chart::{Chart, Frame};
use crate::transform::TransformConfig;
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub width: f64,
    pub height: f64,
    pub axes: Vec<AxisConfig>,
}

impl Default for ExplorerConfig {
    fn default() -> Self { Self { width: WIDTH, height: HEIGHT, axes: Vec::new() } }
}

/// One axis entry. Absent fields leave the chart's current value alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub role: AxisRole,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub scale: Option<ScaleKind>,
    #[serde(default)]
    pub transform: Option<TransformConfig>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub marker_interval: Option<usize>,
}

impl AxisConfig {
    pub fn new(role: AxisRole) -> Self {
        Self { role, column: None, scale: None, transform: None, min: None, max: None, label: None, marker_interval: None }
    }
}

impl ExplorerConfig {
    /// Apply to `chart` and redraw once. A column binding runs first so that its log hint
    /// can be overridden by an explicit scale or transform in the same entry.
    pub fn apply(&self, chart: &mut Chart) -> Option<Frame> {
        chart.batch(|chart| {
            chart.resize(self.width, self.height);
            for entry in &self.axes {
                let role = entry.role;
                if let Some(column) = &entry.column {
                    chart.assign_axis_column(role, column.clone());
                }
                if let Some(kind) = entry.scale {
                    chart.set_scale_kind(role, kind);
                }
                if let Some(t) = entry.transform {
                    chart.set_transform(role, t);
                }
                if let Some(label) = &entry.label {
                    chart.axes.get_mut(role).label = label.clone();
                }
                if entry.min.is_some() || entry.max.is_some() {
                    chart.set_limits(role, entry.min, entry.max);
                }
                if let Some(every) = entry.marker_interval {
                    chart.set_marker_interval(role, every);
                }
            }
        });
        log::debug!("applied config with {} axis entries", self.axes.len());
        chart.update_plot()
    }
}
