//! # View Events
//!
//! Events emitted by the controllers and the layout engine to tell the
//! renderer how much of the screen is stale.

use super::types::PaneId;

/// Events emitted when view updates are needed
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Full screen redraw required (resize, pane opened or closed)
    FullRedrawRequired,

    /// Focused pane content changed
    CurrentPaneRedrawRequired,

    /// A specific pane needs redrawing
    PaneRedrawRequired { pane: PaneId },

    /// Focused pane scrolled vertically
    CurrentPaneScrollChanged { old_offset: usize, new_offset: usize },

    /// Focus moved to another pane
    FocusSwitched,

    /// Status pane needs updating
    StatusBarUpdateRequired,

    /// Only the terminal cursor needs repositioning (cheapest)
    ActiveCursorUpdateRequired,
}

impl ViewEvent {
    /// Whether this event needs pane content repainted, not just the cursor
    pub fn requires_repaint(&self) -> bool {
        !matches!(self, ViewEvent::ActiveCursorUpdateRequired)
    }
}
