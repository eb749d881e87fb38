//! Relation-preserving renaming and declaration shuffle.
//!
//! The transform runs on a finished canonical [`Document`]:
//!
//! 1. every object name is replaced by its image under an
//!    [`ObfuscationMapping`], in declarations, fact arguments and the
//!    initial state alike;
//! 2. object names inside each type declaration are shuffled, per type;
//! 3. the non-fluent facts are shuffled as one flat sequence.
//!
//! Only names and textual order change. Inverse-mapping the result and
//! taking its [`canonical`](Document::canonical) form gives back the
//! canonical document's form exactly. This is not a security mechanism.

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::RngCore;
use rddlgen_core::{Document, GenError, Result};
use rddlgen_space::{
    CoordinateSpace, Grid, NamingPolicy, X_OBFUSCATION_OFFSET, Y_OBFUSCATION_OFFSET,
};
use std::fmt;
use std::str::FromStr;

/// Whether generated documents are obfuscated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObfuscationMode {
    /// Plain names, canonical order.
    #[default]
    Normal,
    /// Renamed objects, shuffled declarations.
    Obfuscate,
}

impl ObfuscationMode {
    /// Command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Obfuscate => "obfuscate",
        }
    }
}

impl fmt::Display for ObfuscationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObfuscationMode {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(Self::Normal),
            "obfuscate" => Ok(Self::Obfuscate),
            other => Err(GenError::invalid(
                "obfuscate_mode",
                format!("expected one of {{obfuscate,normal}}, got '{other}'"),
            )),
        }
    }
}

/// A bijection from canonical object names to obfuscated names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObfuscationMapping {
    forward: IndexMap<String, String>,
}

impl ObfuscationMapping {
    /// Build a mapping from explicit pairs.
    ///
    /// Returns `Err(GenError::InvalidArgument)` if two canonical names map
    /// to the same image or one canonical name is listed twice.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut forward = IndexMap::new();
        let mut images = IndexMap::new();
        for (from, to) in pairs {
            if let Some(prev) = images.insert(to.clone(), from.clone()) {
                return Err(GenError::invalid(
                    "obfuscation",
                    format!("`{prev}` and `{from}` both map to `{to}`"),
                ));
            }
            if forward.insert(from.clone(), to).is_some() {
                return Err(GenError::invalid(
                    "obfuscation",
                    format!("`{from}` is mapped twice"),
                ));
            }
        }
        Ok(Self { forward })
    }

    /// Map a plain grid's axes to `i² + offset` names, with the per-axis
    /// offsets [`X_OBFUSCATION_OFFSET`] and [`Y_OBFUSCATION_OFFSET`].
    pub fn for_grid(grid: &Grid) -> Result<Self> {
        let xs = CoordinateSpace::new(
            grid.x().letter(),
            grid.size_x(),
            NamingPolicy::Obfuscated {
                offset: X_OBFUSCATION_OFFSET,
            },
        )?;
        let ys = CoordinateSpace::new(
            grid.y().letter(),
            grid.size_y(),
            NamingPolicy::Obfuscated {
                offset: Y_OBFUSCATION_OFFSET,
            },
        )?;
        let pairs = grid
            .x()
            .names()
            .zip(xs.names())
            .chain(grid.y().names().zip(ys.names()))
            .map(|(a, b)| (a.to_string(), b.to_string()));
        Self::from_pairs(pairs)
    }

    /// Image of `name`, if it is in the mapping's domain.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.forward.get(name).map(String::as_str)
    }

    /// Number of mapped names.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The inverse bijection.
    pub fn invert(&self) -> Self {
        Self {
            forward: self
                .forward
                .iter()
                .map(|(a, b)| (b.clone(), a.clone()))
                .collect(),
        }
    }

    /// Rename every object of `doc`. Names outside the mapping's domain
    /// are kept as they are.
    pub fn rename(&self, doc: &mut Document) {
        doc.rename_objects(|name| self.get(name).unwrap_or(name).to_string());
    }
}

/// Apply the full transform to `doc` in place.
///
/// Comments are dropped because they may quote canonical names. Draws
/// from `rng` in a fixed order: one shuffle per object type in declaration
/// order, then one shuffle of the facts.
pub fn obfuscate(doc: &mut Document, mapping: &ObfuscationMapping, rng: &mut dyn RngCore) {
    mapping.rename(doc);
    doc.strip_comments();
    for ty in &mut doc.objects {
        ty.objects.shuffle(rng);
    }
    doc.non_fluents.shuffle(rng);
}
