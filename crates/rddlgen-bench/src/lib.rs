//! Benchmark profiles for the rddlgen instance generator.
//!
//! - [`reference_navigation`]: 20x20 navigation, the largest batch size
//! - [`reference_wildfire`]: 12x12 wildfire with a column of omitted edges
//! - [`stress_wildfire`]: 100x100 wildfire (~79K directed edges)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rddlgen_domains::{NavigationConfig, ObfuscationMode, WildfireConfig};
use rddlgen_space::Connectivity;

/// Largest navigation batch instance.
pub fn reference_navigation(mode: ObfuscationMode) -> NavigationConfig {
    NavigationConfig {
        size_x: 20,
        size_y: 20,
        mode,
        ..NavigationConfig::default()
    }
}

/// Largest wildfire batch instance with every `x1 -> x2` edge omitted.
pub fn reference_wildfire(mode: ObfuscationMode) -> WildfireConfig {
    let size = 12;
    WildfireConfig {
        size_x: size,
        size_y: size,
        omitted_neighbors: (1..=size).map(|y| format!("x1,y{y}->x2,y{y}")).collect(),
        connectivity: Connectivity::Eight,
        mode,
        ..WildfireConfig::default()
    }
}

/// A 100x100 8-connected wildfire grid.
pub fn stress_wildfire() -> WildfireConfig {
    WildfireConfig {
        size_x: 100,
        size_y: 100,
        ..WildfireConfig::default()
    }
}
