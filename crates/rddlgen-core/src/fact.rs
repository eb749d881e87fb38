//! Ground facts: `PREDICATE(args)` with an optional real value.

use smallvec::SmallVec;
use std::fmt;

/// Object-name arguments of a fact. Grid predicates take at most four.
pub type FactArgs = SmallVec<[String; 4]>;

/// A ground atom over named objects.
///
/// Boolean facts render as `PRED(a,b)`, valued facts as `PRED(a,b) = v`.
/// Arity is not checked here; producers are trusted to supply well-formed
/// argument tuples.
#[derive(Clone, Debug, PartialEq)]
pub struct Fact {
    /// Predicate name, e.g. `NEIGHBOR` or `robot-at`.
    pub predicate: String,
    /// Object arguments in declaration order.
    pub args: FactArgs,
    /// Assigned value for real-valued predicates.
    pub value: Option<f64>,
}

impl Fact {
    /// A boolean fact.
    pub fn new<I, S>(predicate: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            predicate: predicate.into(),
            args: args.into_iter().map(Into::into).collect(),
            value: None,
        }
    }

    /// A real-valued fact.
    pub fn valued<I, S>(predicate: impl Into<String>, args: I, value: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: Some(value),
            ..Self::new(predicate, args)
        }
    }

    /// Replace every argument with `rename(arg)`.
    pub fn rename_args(&mut self, mut rename: impl FnMut(&str) -> String) {
        for arg in self.args.iter_mut() {
            *arg = rename(arg.as_str());
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.predicate, self.args.join(","))?;
        if let Some(v) = self.value {
            write!(f, " = {}", format_real(v))?;
        }
        Ok(())
    }
}

/// Render a real number in shortest round-trip decimal form, always with a
/// fractional part (`1.0`, not `1`).
///
/// `f64`'s `Display` never switches to exponent notation, which the
/// consuming grammar does not accept.
pub fn format_real(v: f64) -> String {
    let s = v.to_string();
    if !v.is_finite() || s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}
