//! # Core Event Types
//!
//! Common types shared by the buffer, controller and layout code: logical
//! positions, pane identifiers, the input mode and pane anchors.

use bitflags::bitflags;
use std::fmt;

/// Logical position in text content (line and column, both in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LogicalPosition {
    pub line: usize,
    pub column: usize,
}

impl LogicalPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}

/// Stable identity of a pane inside the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u32);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

/// Whether typed text is spliced in or overwrites what is under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Insert,
    Overwrite,
}

impl InputMode {
    pub fn is_insert(self) -> bool {
        self == InputMode::Insert
    }

    pub fn toggled(self) -> Self {
        match self {
            InputMode::Insert => InputMode::Overwrite,
            InputMode::Overwrite => InputMode::Insert,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputMode::Insert => "INS",
            InputMode::Overwrite => "OVR",
        }
    }
}

bitflags! {
    /// Screen edges a pane tracks
    ///
    /// A pane anchored on exactly one edge of an axis is docked against that
    /// edge and consumes space from it. A pane anchored on both edges of an
    /// axis stretches over whatever is left on that axis.
    ///
    /// ```rust
    /// use paned::editor::events::Anchors;
    ///
    /// let sidebar = Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT;
    /// assert!(sidebar.is_docked_horizontally());
    /// assert!(sidebar.spans_vertically());
    /// assert!(Anchors::ALL.spans_horizontally());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Anchors: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;

        /// Stretch over the remaining rectangle
        const ALL = Self::TOP.bits()
                  | Self::BOTTOM.bits()
                  | Self::LEFT.bits()
                  | Self::RIGHT.bits();
    }
}

impl Anchors {
    /// Anchored on top xor bottom
    pub fn is_docked_vertically(self) -> bool {
        self.contains(Anchors::TOP) != self.contains(Anchors::BOTTOM)
    }

    /// Anchored on left xor right
    pub fn is_docked_horizontally(self) -> bool {
        self.contains(Anchors::LEFT) != self.contains(Anchors::RIGHT)
    }

    pub fn spans_vertically(self) -> bool {
        self.contains(Anchors::TOP | Anchors::BOTTOM)
    }

    pub fn spans_horizontally(self) -> bool {
        self.contains(Anchors::LEFT | Anchors::RIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_position_zero_should_be_origin() {
        let pos = LogicalPosition::zero();
        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn logical_positions_should_order_by_line_then_column() {
        assert!(LogicalPosition::new(1, 0) > LogicalPosition::new(0, 50));
        assert!(LogicalPosition::new(2, 3) < LogicalPosition::new(2, 4));
    }

    #[test]
    fn input_mode_should_toggle() {
        assert_eq!(InputMode::Insert.toggled(), InputMode::Overwrite);
        assert_eq!(InputMode::Overwrite.toggled(), InputMode::Insert);
        assert!(InputMode::default().is_insert());
    }

    #[test]
    fn anchors_should_classify_axes() {
        let top_bar = Anchors::TOP | Anchors::LEFT | Anchors::RIGHT;
        assert!(top_bar.is_docked_vertically());
        assert!(!top_bar.is_docked_horizontally());
        assert!(top_bar.spans_horizontally());

        let floating = Anchors::NONE;
        assert!(!floating.is_docked_vertically());
        assert!(!floating.spans_vertically());
    }
}
