//! Named positions along one grid axis.

use indexmap::IndexMap;
use rddlgen_core::{GenError, Result};

/// Numeric offset added to `i²` when obfuscating X-axis names.
pub const X_OBFUSCATION_OFFSET: u64 = 5;

/// Numeric offset added to `i²` when obfuscating Y-axis names.
pub const Y_OBFUSCATION_OFFSET: u64 = 11;

/// How the numeric suffix of a position name is derived from its 1-based
/// index `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamingPolicy {
    /// `letter + i`.
    Plain,
    /// `letter + (i² + offset)`. Injective for `i >= 1`.
    Obfuscated {
        /// Per-axis constant added to the square.
        offset: u64,
    },
}

impl NamingPolicy {
    /// Numeric suffix for the 1-based index `i`.
    pub fn suffix(self, i: u64) -> u64 {
        match self {
            Self::Plain => i,
            Self::Obfuscated { offset } => i * i + offset,
        }
    }
}

/// An ordered sequence of unique position names for one axis.
///
/// Constructed once per generation call and immutable afterwards. Name to
/// index lookups go through an insertion-ordered map so iteration order
/// always matches index order.
#[derive(Clone, Debug)]
pub struct CoordinateSpace {
    letter: char,
    policy: NamingPolicy,
    names: IndexMap<String, u32>,
}

impl CoordinateSpace {
    /// Build the names `letter + suffix(i)` for `i` in `1..=len`.
    ///
    /// Returns `Err(GenError::InvalidArgument)` if `len` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rddlgen_space::{CoordinateSpace, NamingPolicy};
    ///
    /// let xs = CoordinateSpace::new('x', 3, NamingPolicy::Plain).unwrap();
    /// assert_eq!(xs.names().collect::<Vec<_>>(), ["x1", "x2", "x3"]);
    ///
    /// let ys = CoordinateSpace::new('y', 3, NamingPolicy::Obfuscated { offset: 11 }).unwrap();
    /// assert_eq!(ys.names().collect::<Vec<_>>(), ["y12", "y15", "y20"]);
    /// ```
    pub fn new(letter: char, len: u32, policy: NamingPolicy) -> Result<Self> {
        if len == 0 {
            return Err(GenError::invalid(
                "size",
                format!("axis `{letter}` must have at least one position"),
            ));
        }
        let names = (1..=u64::from(len))
            .zip(0u32..)
            .map(|(i, idx)| (format!("{letter}{}", policy.suffix(i)), idx))
            .collect();
        Ok(Self {
            letter,
            policy,
            names,
        })
    }

    /// Axis letter prefixed to every name.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Naming policy used to derive suffixes.
    pub fn policy(&self) -> NamingPolicy {
        self.policy
    }

    /// Number of positions.
    pub fn len(&self) -> u32 {
        self.names.len() as u32
    }

    /// Always `false`; construction rejects empty axes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Name at the 0-based `index`, if in range.
    pub fn name(&self, index: u32) -> Option<&str> {
        self.names
            .get_index(index as usize)
            .map(|(name, _)| name.as_str())
    }

    /// 0-based index of `name`, if it belongs to this axis.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.names.get(name).copied()
    }

    /// Names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Human-readable range, e.g. `x1..x5`.
    pub fn describe_range(&self) -> String {
        let first = self.names.keys().next().map(String::as_str).unwrap_or("");
        let last = self.names.keys().last().map(String::as_str).unwrap_or("");
        format!("{first}..{last}")
    }
}

impl std::ops::Index<u32> for CoordinateSpace {
    type Output = str;

    /// Name at the 0-based `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`, like slice indexing.
    fn index(&self, index: u32) -> &str {
        match self.name(index) {
            Some(name) => name,
            None => panic!(
                "position index {index} out of range for axis `{}` of length {}",
                self.letter,
                self.len()
            ),
        }
    }
}
