//! Procedural RDDL instance generator for grid planning domains.
//!
//! This facade crate re-exports the generator layers and adds the thin
//! I/O around them: writing `<instance>.rddl` files ([`output`]) and
//! enumerating whole size ranges ([`batch`]).
//!
//! # Quick start
//!
//! ```
//! use rddlgen::{render, seeded_rng, Domain, Navigation, NavigationConfig};
//!
//! let nav = Navigation::new(NavigationConfig { size_x: 3, size_y: 3, ..Default::default() });
//! let out = nav.generate("navigation_inst_mdp__0", &mut seeded_rng(7)).unwrap();
//! let text = render(&out.document);
//! assert!(text.contains("GOAL(x3,y3);"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod output;

pub use batch::{
    instance_name, plan_sizes, BatchDomain, BatchError, BatchPlan, BatchReport, FailurePolicy,
};
pub use output::{emit_instance, write_instance, OutputError};

pub use rddlgen_core::{Cell, Document, Fact, GenError, InstanceDescriptor};
pub use rddlgen_domains::{
    seeded_rng, Domain, GeneratedInstance, Navigation, NavigationConfig, ObfuscationMapping,
    ObfuscationMode, Wildfire, WildfireConfig,
};
pub use rddlgen_rddl::render;
pub use rddlgen_space::Connectivity;
