//! The [`Domain`] trait.

use crate::obfuscate::ObfuscationMapping;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rddlgen_core::{Document, Result};

/// A generated instance plus the renaming that produced it, if any.
#[derive(Clone, Debug)]
pub struct GeneratedInstance {
    /// The document, canonical or obfuscated.
    pub document: Document,
    /// Canonical-to-obfuscated renaming, present in obfuscate mode.
    pub mapping: Option<ObfuscationMapping>,
}

/// A grid domain that can generate problem instances.
///
/// # Contract
///
/// - `generate()` validates the full configuration before drawing from
///   `rng`; an `Err` means nothing was generated.
/// - All randomness comes from `rng`. Equal seeds give equal documents.
/// - The trait is object safe so drivers can hold `Box<dyn Domain>`.
pub trait Domain {
    /// Domain identifier written into both blocks, e.g. `navigation_mdp`.
    fn domain_name(&self) -> &'static str;

    /// Prefix for batch instance names, e.g. `navigation`.
    fn short_name(&self) -> &'static str;

    /// Check the configuration without generating anything.
    fn validate(&self) -> Result<()>;

    /// Generate the instance named `instance_name`.
    fn generate(&self, instance_name: &str, rng: &mut dyn RngCore) -> Result<GeneratedInstance>;
}

/// Deterministic generator for `seed`, shared by the CLI and the tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
