//! Per-cell parameters and designated cell sets.
//!
//! Obstacle probabilities carry a left-to-right difficulty gradient:
//! `0.01 + 0.9 · i / (X − 1)` for 0-based column `i`, plus a uniform
//! perturbation in `[0, 0.05)`. Values always stay inside `[0, 1]`.

use rand::{Rng, RngCore};
use rddlgen_core::{Cell, GenError, Result};
use rddlgen_space::Grid;

/// Probability floor at the leftmost column.
pub const OBSTACLE_BASE: f64 = 0.01;

/// Gradient span from the leftmost to the rightmost column.
pub const OBSTACLE_SPAN: f64 = 0.9;

/// Upper bound (exclusive) of the random perturbation.
pub const OBSTACLE_NOISE: f64 = 0.05;

/// Deterministic part of the obstacle probability for 0-based column `x`.
///
/// A single-column grid has no gradient and gets the floor value.
pub fn obstacle_bias(x: u32, size_x: u32) -> f64 {
    if size_x <= 1 {
        return OBSTACLE_BASE;
    }
    OBSTACLE_BASE + OBSTACLE_SPAN * f64::from(x) / f64::from(size_x - 1)
}

/// Obstacle probability for every cell on an interior row (all rows but
/// the first and last), X-major.
///
/// Draws exactly one uniform sample per returned cell, in return order.
pub fn obstacle_probabilities(grid: &Grid, rng: &mut dyn RngCore) -> Vec<(Cell, f64)> {
    let size_y = grid.size_y();
    let interior_rows = size_y.saturating_sub(2) as usize;
    let mut out = Vec::with_capacity(grid.size_x() as usize * interior_rows);
    for x in 0..grid.size_x() {
        for y in 1..size_y.saturating_sub(1) {
            let noise = OBSTACLE_NOISE * rng.random::<f64>();
            out.push((Cell::new(x, y), obstacle_bias(x, grid.size_x()) + noise));
        }
    }
    out
}

/// Navigation start: rightmost column, bottom row.
pub fn navigation_start(grid: &Grid) -> Cell {
    Cell::new(grid.size_x() - 1, 0)
}

/// Navigation goal: rightmost column, top row.
pub fn navigation_goal(grid: &Grid) -> Cell {
    Cell::new(grid.size_x() - 1, grid.size_y() - 1)
}

/// Default wildfire target: the centre cell.
pub fn default_target(grid: &Grid) -> Cell {
    Cell::new(grid.size_x() / 2, grid.size_y() / 2)
}

/// Default initially burning cell: the top-left corner.
pub fn default_initial_burning(grid: &Grid) -> Cell {
    Cell::new(0, grid.size_y() - 1)
}

/// Resolve a designated set from caller literals, or fall back to
/// `default` when none were supplied.
///
/// # Errors
///
/// - [`GenError::InvalidArgument`] if `literals` is an empty list: a
///   designated set is never empty.
/// - [`GenError::Format`] for the first literal that is not an in-bounds
///   position.
pub fn resolve_cells(
    grid: &Grid,
    name: &'static str,
    literals: Option<&[String]>,
    default: impl FnOnce(&Grid) -> Vec<Cell>,
) -> Result<Vec<Cell>> {
    match literals {
        Some([]) => Err(GenError::invalid(name, "must name at least one position")),
        Some(literals) => grid.parse_positions(literals),
        None => Ok(default(grid)),
    }
}

/// Batch target rule: a checkerboard over the far corner region, the
/// last third of each axis.
///
/// Odd pass from `(X, Y)` and even pass from `(X−1, Y−1)`, stepping two
/// positions towards the origin while staying past `size − size/3`
/// (1-based).
pub fn far_corner_targets(size_x: u32, size_y: u32) -> Vec<Cell> {
    let x_start = size_x - size_x / 3;
    let y_start = size_y - size_y / 3;
    let mut out = Vec::new();
    for (x0, y0) in [(size_x, size_y), (size_x.saturating_sub(1), size_y.saturating_sub(1))] {
        for x in descending_by_two(x0, x_start) {
            for y in descending_by_two(y0, y_start) {
                out.push(Cell::new(x - 1, y - 1));
            }
        }
    }
    out
}

/// Batch burning rule: a checkerboard over the near corner region, the
/// first third of each axis.
///
/// Odd pass from `(1, 1)` and even pass from `(2, 2)`, stepping two
/// positions up to `size/3` inclusive (1-based).
pub fn near_corner_burning(size_x: u32, size_y: u32) -> Vec<Cell> {
    let x_end = size_x / 3;
    let y_end = size_y / 3;
    let mut out = Vec::new();
    for start in [1u32, 2] {
        for x in (start..=x_end).step_by(2) {
            for y in (start..=y_end).step_by(2) {
                out.push(Cell::new(x - 1, y - 1));
            }
        }
    }
    out
}

/// `from, from-2, ...` while strictly greater than `stop` (1-based).
fn descending_by_two(from: u32, stop: u32) -> impl Iterator<Item = u32> {
    std::iter::successors(Some(from), |v| v.checked_sub(2)).take_while(move |&v| v > stop)
}
