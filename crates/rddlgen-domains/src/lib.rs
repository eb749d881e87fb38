//! Instance generators for grid-based RDDL domains.
//!
//! Each domain implements [`Domain`]: it validates its config, builds a
//! canonical [`Document`](rddlgen_core::Document) from the grid topology
//! and [`params`], and optionally passes it through the [`obfuscate`]
//! transform.
//!
//! # Pipeline (per instance)
//!
//! 1. Config validation: every error surfaces here, before any draw.
//! 2. Topology: axis chains (navigation) or cell adjacency (wildfire).
//! 3. Parameters and designated cells.
//! 4. Optional renaming plus declaration shuffle.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod domain;
pub mod navigation;
pub mod obfuscate;
pub mod params;
pub mod wildfire;

pub use domain::{seeded_rng, Domain, GeneratedInstance};
pub use navigation::{Navigation, NavigationConfig};
pub use obfuscate::{obfuscate, ObfuscationMapping, ObfuscationMode};
pub use wildfire::{Wildfire, WildfireConfig};
