//! The product of two coordinate spaces.

use crate::axis::{CoordinateSpace, NamingPolicy};
use rddlgen_core::{Cell, GenError, Result};

/// A `size_x * size_y` grid whose cells are named by an X and a Y
/// [`CoordinateSpace`].
#[derive(Clone, Debug)]
pub struct Grid {
    x: CoordinateSpace,
    y: CoordinateSpace,
}

impl Grid {
    /// Grid over two existing axes.
    pub fn new(x: CoordinateSpace, y: CoordinateSpace) -> Self {
        Self { x, y }
    }

    /// Grid with plain `x1..xN` / `y1..yM` names.
    ///
    /// Returns `Err(GenError::InvalidArgument)` if either size is 0.
    pub fn plain(size_x: u32, size_y: u32) -> Result<Self> {
        Ok(Self {
            x: CoordinateSpace::new('x', size_x, NamingPolicy::Plain)?,
            y: CoordinateSpace::new('y', size_y, NamingPolicy::Plain)?,
        })
    }

    /// X axis.
    pub fn x(&self) -> &CoordinateSpace {
        &self.x
    }

    /// Y axis.
    pub fn y(&self) -> &CoordinateSpace {
        &self.y
    }

    /// Number of X positions.
    pub fn size_x(&self) -> u32 {
        self.x.len()
    }

    /// Number of Y positions.
    pub fn size_y(&self) -> u32 {
        self.y.len()
    }

    /// All cells, X-major: `(0,0), (0,1), ..., (size_x-1, size_y-1)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size_y = self.size_y();
        (0..self.size_x()).flat_map(move |x| (0..size_y).map(move |y| Cell::new(x, y)))
    }

    /// `(x_name, y_name)` of an in-bounds cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn names(&self, cell: Cell) -> (&str, &str) {
        (&self.x[cell.x], &self.y[cell.y])
    }

    /// Check that `cell` is inside the grid.
    pub fn check_cell(&self, cell: Cell) -> Result<Cell> {
        if !cell.in_bounds(self.size_x(), self.size_y()) {
            return Err(GenError::format(
                cell.to_string(),
                format!("outside [0, {}) x [0, {})", self.size_x(), self.size_y()),
            ));
        }
        Ok(cell)
    }

    /// Parse a position literal such as `x2,y3` or `(x2,y3)` into a cell.
    ///
    /// Whitespace around either component is ignored. Parentheses must be
    /// balanced, both components must be present, and each must name a
    /// position of the matching axis.
    pub fn parse_position(&self, literal: &str) -> Result<Cell> {
        let trimmed = literal.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) if trimmed.len() >= 2 => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(GenError::format(literal, "unbalanced parentheses")),
        };
        let mut parts = inner.split(',');
        let (x_part, y_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x.trim(), y.trim()),
            (_, None, _) => return Err(GenError::format(literal, "missing comma")),
            _ => {
                return Err(GenError::format(
                    literal,
                    "expected exactly two components",
                ))
            }
        };
        let x = self.x.index_of(x_part).ok_or_else(|| {
            GenError::format(
                literal,
                format!(
                    "unknown x position `{x_part}` (grid has {})",
                    self.x.describe_range()
                ),
            )
        })?;
        let y = self.y.index_of(y_part).ok_or_else(|| {
            GenError::format(
                literal,
                format!(
                    "unknown y position `{y_part}` (grid has {})",
                    self.y.describe_range()
                ),
            )
        })?;
        Ok(Cell::new(x, y))
    }

    /// Parse every literal, failing on the first malformed one.
    pub fn parse_positions<S: AsRef<str>>(&self, literals: &[S]) -> Result<Vec<Cell>> {
        literals
            .iter()
            .map(|l| self.parse_position(l.as_ref()))
            .collect()
    }
}
