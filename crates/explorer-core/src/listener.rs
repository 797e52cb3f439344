// File: crates/explorer-core/src/listener.rs
// Summary: Collaborator hooks: input-field mirroring of axis limits and frame delivery to a renderer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::axis::AxisRole;
use crate::chart::Frame;

/// Receives every committed domain mutation and every completed redraw.
pub trait ChartListener {
    /// Limits written by pan, box-zoom, manual edit or reset. `None` means auto.
    fn limits_changed(&mut self, _role: AxisRole, _min: Option<f64>, _max: Option<f64>) {}
    fn redrawn(&mut self, _frame: &Frame) {}
}

// Lets the caller keep a handle to a listener after registering it.
impl<T: ChartListener> ChartListener for Rc<RefCell<T>> {
    fn limits_changed(&mut self, role: AxisRole, min: Option<f64>, max: Option<f64>) {
        self.borrow_mut().limits_changed(role, min, max);
    }
    fn redrawn(&mut self, frame: &Frame) { self.borrow_mut().redrawn(frame); }
}
