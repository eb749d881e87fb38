//! Grid cells.

use std::fmt;

/// A cell of a `size_x * size_y` grid, addressed by 0-based axis indices.
///
/// Object names are 1-based (`x1` is index 0); the conversion lives in
/// the coordinate spaces, so a `Cell` never carries names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Index along the X axis.
    pub x: u32,
    /// Index along the Y axis.
    pub y: u32,
}

impl Cell {
    /// Create a cell from 0-based indices.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside a `size_x * size_y` grid.
    pub fn in_bounds(&self, size_x: u32, size_y: u32) -> bool {
        self.x < size_x && self.y < size_y
    }

    /// Offset the cell by `(dx, dy)`, returning `None` when the result
    /// leaves the `size_x * size_y` grid.
    pub fn offset(&self, dx: i64, dy: i64, size_x: u32, size_y: u32) -> Option<Cell> {
        let nx = i64::from(self.x) + dx;
        let ny = i64::from(self.y) + dy;
        if nx < 0 || ny < 0 || nx >= i64::from(size_x) || ny >= i64::from(size_y) {
            return None;
        }
        Some(Cell::new(nx as u32, ny as u32))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
