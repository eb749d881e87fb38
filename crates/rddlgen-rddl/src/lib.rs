//! RDDL text serialization for generated grid instances.
//!
//! [`render`] is the final, pure step of the pipeline: it turns a
//! [`Document`](rddlgen_core::Document) into a non-fluents block followed
//! by an instance block, in the order the document lists its records.
//! No arity or domain checks happen here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod balance;
pub mod writer;

pub use balance::{first_unbalanced, is_balanced};
pub use writer::{render, RddlDocument};
