// File: crates/explorer-core/tests/common/mod.rs
// Purpose: Shared listener that records limit mirrors and redraws for assertions.

use explorer_core::axis::AxisRole;
use explorer_core::chart::Frame;
use explorer_core::listener::ChartListener;

#[derive(Debug, Default)]
pub struct Recorder {
    pub limits: Vec<(AxisRole, Option<f64>, Option<f64>)>,
    pub redraws: usize,
}

impl ChartListener for Recorder {
    fn limits_changed(&mut self, role: AxisRole, min: Option<f64>, max: Option<f64>) {
        self.limits.push((role, min, max));
    }
    fn redrawn(&mut self, _frame: &Frame) { self.redraws += 1; }
}
