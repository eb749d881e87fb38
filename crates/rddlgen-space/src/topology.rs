//! Directed relations over a grid.
//!
//! Two families:
//!
//! - [`neighbours`]: cell-to-cell adjacency under a [`Connectivity`]
//!   policy, emitted in both directions and clipped at the boundary.
//! - [`axis_chain`]: consecutive-position steps along each axis tagged with
//!   a [`Direction`], for domains that move along one axis at a time.

use rddlgen_core::{Cell, GenError};
use std::fmt;
use std::str::FromStr;

/// 4-connected offsets `(dx, dy)`: left, right, down, up.
const OFFSETS_4: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 8-connected offsets, X-major over `{-1, 0, 1}²` minus the origin.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid adjacency policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Orthogonal neighbours only.
    Four,
    /// Orthogonal plus diagonal neighbours.
    #[default]
    Eight,
}

impl Connectivity {
    /// Neighbour offsets in emission order.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }

    /// Command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Four => "4connected",
            Self::Eight => "8connected",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connectivity {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4connected" => Ok(Self::Four),
            "8connected" => Ok(Self::Eight),
            other => Err(GenError::invalid(
                "connectivity",
                format!("expected one of {{4connected,8connected}}, got '{other}'"),
            )),
        }
    }
}

/// A directed adjacency: `from` is a neighbour of `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Neighbor {
    /// Source cell.
    pub from: Cell,
    /// Target cell.
    pub to: Cell,
}

/// Every directed adjacency of a `size_x * size_y` grid.
///
/// Cells are visited X-major; each cell's neighbours follow
/// [`Connectivity::offsets`]. Out-of-bounds neighbours are dropped, so
/// corners have fewer relations than interior cells. Never self-referential,
/// never duplicated.
pub fn neighbours(size_x: u32, size_y: u32, connectivity: Connectivity) -> Vec<Neighbor> {
    let mut out = Vec::with_capacity(expected_edge_count(size_x, size_y, connectivity) as usize);
    for x in 0..size_x {
        for y in 0..size_y {
            let from = Cell::new(x, y);
            for &(dx, dy) in connectivity.offsets() {
                if let Some(to) = from.offset(dx, dy, size_x, size_y) {
                    out.push(Neighbor { from, to });
                }
            }
        }
    }
    out
}

/// Closed-form number of directed relations produced by [`neighbours`].
///
/// 4-connected: `2·(X·(Y−1) + Y·(X−1))`. 8-connected adds `4·(X−1)·(Y−1)`
/// diagonal relations.
pub fn expected_edge_count(size_x: u32, size_y: u32, connectivity: Connectivity) -> u64 {
    let (x, y) = (u64::from(size_x), u64::from(size_y));
    if x == 0 || y == 0 {
        return 0;
    }
    let orthogonal = 2 * (x * (y - 1) + y * (x - 1));
    match connectivity {
        Connectivity::Four => orthogonal,
        Connectivity::Eight => orthogonal + 4 * (x - 1) * (y - 1),
    }
}

/// Direction tag of an [`AxisStep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Y index increases.
    North,
    /// Y index decreases.
    South,
    /// X index increases.
    East,
    /// X index decreases.
    West,
}

impl Direction {
    /// Predicate name in the generated document.
    pub fn predicate(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
        }
    }

    /// Whether steps in this direction move along the Y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// A single step between consecutive positions on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisStep {
    /// Direction tag; decides which axis `from`/`to` index.
    pub direction: Direction,
    /// 0-based source position.
    pub from: u32,
    /// 0-based target position.
    pub to: u32,
}

/// Per-axis step chains: for each consecutive Y pair a NORTH/SOUTH pair,
/// then for each consecutive X pair an EAST/WEST pair.
pub fn axis_chain(size_x: u32, size_y: u32) -> Vec<AxisStep> {
    let mut out = Vec::with_capacity(axis_chain_count(size_x, size_y) as usize);
    for j in 1..size_y {
        out.push(AxisStep {
            direction: Direction::North,
            from: j - 1,
            to: j,
        });
        out.push(AxisStep {
            direction: Direction::South,
            from: j,
            to: j - 1,
        });
    }
    for i in 1..size_x {
        out.push(AxisStep {
            direction: Direction::East,
            from: i - 1,
            to: i,
        });
        out.push(AxisStep {
            direction: Direction::West,
            from: i,
            to: i - 1,
        });
    }
    out
}

/// Closed-form number of steps produced by [`axis_chain`]:
/// `2·(Y−1) + 2·(X−1)`.
pub fn axis_chain_count(size_x: u32, size_y: u32) -> u64 {
    2 * u64::from(size_y.saturating_sub(1)) + 2 * u64::from(size_x.saturating_sub(1))
}
