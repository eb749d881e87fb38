//! Coordinate spaces and grid topology for RDDL instance generation.
//!
//! A grid is the product of two [`CoordinateSpace`]s, one per axis. The
//! [`topology`] module derives directed relations over that product under
//! a [`Connectivity`] policy, or as per-axis [`AxisStep`] chains.
//!
//! # Relation counts
//!
//! Every builder has a closed-form count in [`topology`], so the number of
//! emitted relations is a pure function of the grid size and policy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod grid;
pub mod omission;
pub mod topology;

pub use axis::{CoordinateSpace, NamingPolicy, X_OBFUSCATION_OFFSET, Y_OBFUSCATION_OFFSET};
pub use grid::Grid;
pub use omission::{apply_omissions, parse_omission, Omission, OmissionOutcome};
pub use topology::{
    axis_chain, axis_chain_count, expected_edge_count, neighbours, AxisStep, Connectivity,
    Direction, Neighbor,
};
