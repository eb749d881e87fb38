//! Core types for RDDL grid instance generation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! structured intermediate that every other layer produces or consumes:
//! grid cells, facts, the [`Document`] model, the [`InstanceDescriptor`]
//! scalar metadata, and the shared [`GenError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod document;
pub mod error;
pub mod fact;
pub mod instance;

pub use cell::Cell;
pub use document::{CanonicalForm, Document, Entry, ObjectType};
pub use error::{GenError, Result};
pub use fact::{format_real, Fact, FactArgs};
pub use instance::{check_discount, check_planning, check_sizes, InstanceDescriptor};
