use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

use super::PresentationData;

/// Observer notified after a line visibility change has been fully applied.
///
/// The listener only receives a shared reference, so it can read the new
/// geometry but cannot toggle visibility from inside the callback.
pub trait VisibilityListener {
    fn on_line_visibility_changed(&self, data: &PresentationData, visible: bool, index: usize);
}

impl PresentationData {
    /// Registers `listener` without taking ownership of it.
    ///
    /// Replaces any previous listener. Once the caller drops its last `Rc`,
    /// notifications silently stop.
    pub fn set_listener<L>(&mut self, listener: &Rc<L>)
    where
        L: VisibilityListener + 'static,
    {
        let listener: Weak<L> = Rc::downgrade(listener);
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| listener.strong_count() > 0)
    }

    pub fn is_visible(&self, index: usize) -> ChartResult<bool> {
        Ok(self.line_at(index)?.is_visible())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_visible()).count()
    }

    /// Shows or hides one line.
    ///
    /// Any hide request while only one line is visible is ignored and returns
    /// `Ok(false)`, even when it targets an already hidden line.
    /// Otherwise the flag is stored, all geometry and bounds are rebuilt, the
    /// listener is notified and `Ok(true)` is returned.
    pub fn set_visible(&mut self, visible: bool, index: usize) -> ChartResult<bool> {
        let count = self.lines.len();
        if index >= count {
            return Err(ChartError::LineIndexOutOfRange { index, count });
        }

        if !visible && self.visible_count() == 1 {
            debug!(index, "ignoring hide request while a single line is visible");
            return Ok(false);
        }

        self.lines[index].set_visible(visible);
        trace!(index, visible, "set line visibility");
        self.recalculate_bounds();

        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            listener.on_line_visibility_changed(self, visible, index);
        }
        Ok(true)
    }
}
