//! # Geometry Types
//!
//! Small value types for positions, sizes and screen rectangles so the
//! layout and viewport code never passes bare tuples around.

/// Cell offset inside a pane's content area, or a scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Size of a viewport in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// No cell can be drawn
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Absolute screen rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink the rectangle by `amount` cells on every side
    pub fn inset(self, amount: u16) -> Self {
        let width = self.width.saturating_sub(amount.saturating_mul(2));
        let height = self.height.saturating_sub(amount.saturating_mul(2));
        Self {
            x: self.x.saturating_add(amount.min(self.width / 2)),
            y: self.y.saturating_add(amount.min(self.height / 2)),
            width,
            height,
        }
    }

    /// Whether two rectangles share at least one cell
    pub fn intersects(self, other: Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width as usize, self.height as usize)
    }
}
