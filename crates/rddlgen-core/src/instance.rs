//! Scalar instance metadata.

use crate::error::{GenError, Result};

/// Scalar metadata of one generated instance.
///
/// Immutable once generation begins. [`validate`](Self::validate) is run
/// by every generator before it draws any randomness.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceDescriptor {
    /// Instance name; also the output file stem.
    pub name: String,
    /// Domain the instance refers to, e.g. `navigation_mdp`.
    pub domain: String,
    /// Planning horizon. Must be positive.
    pub horizon: u32,
    /// Discount factor in `[0, 1]`.
    pub discount: f64,
    /// Maximum number of simultaneous non-default actions. Must be positive.
    pub max_nondef_actions: u32,
}

impl InstanceDescriptor {
    /// Name of the companion non-fluents block (`nf_<name>`).
    pub fn non_fluents_name(&self) -> String {
        format!("nf_{}", self.name)
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidArgument`] if:
    /// - `name` or `domain` is empty or not a single identifier token
    /// - `horizon` or `max_nondef_actions` is zero
    /// - `discount` is NaN or outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        check_ident("name", &self.name)?;
        check_ident("domain", &self.domain)?;
        check_planning(self.horizon, self.discount, self.max_nondef_actions)
    }
}

/// Validate the scalar planning parameters shared by every domain config.
///
/// # Errors
///
/// Returns [`GenError::InvalidArgument`] for a zero `horizon` or
/// `max_nondef_actions`, or a `discount` outside `[0, 1]`.
pub fn check_planning(horizon: u32, discount: f64, max_nondef_actions: u32) -> Result<()> {
    if horizon == 0 {
        return Err(GenError::invalid("horizon", "must be a positive integer"));
    }
    if max_nondef_actions == 0 {
        return Err(GenError::invalid(
            "max_nondef_actions",
            "must be a positive integer",
        ));
    }
    check_discount(discount)
}

/// Grid dimensions must both be positive.
pub fn check_sizes(size_x: u32, size_y: u32) -> Result<()> {
    if size_x == 0 || size_y == 0 {
        return Err(GenError::invalid(
            "size",
            format!("grid dimensions must be positive integers, got {size_x}x{size_y}"),
        ));
    }
    Ok(())
}

/// Discount must lie in the closed unit interval.
pub fn check_discount(discount: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&discount) {
        return Err(GenError::invalid(
            "discount",
            format!("must be between 0.0 and 1.0, got {discount}"),
        ));
    }
    Ok(())
}

fn check_ident(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GenError::invalid(name, "must not be empty"));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
    {
        return Err(GenError::invalid(
            name,
            format!("`{value}` contains disallowed character {bad:?}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> InstanceDescriptor {
        InstanceDescriptor {
            name: "navigation_inst_mdp__0".into(),
            domain: "navigation_mdp".into(),
            horizon: 10,
            discount: 0.9,
            max_nondef_actions: 1,
        }
    }

    #[test]
    fn valid_descriptor_passes() {
        assert!(descriptor().validate().is_ok());
        assert_eq!(descriptor().non_fluents_name(), "nf_navigation_inst_mdp__0");
    }

    #[test]
    fn zero_horizon_rejected() {
        let d = InstanceDescriptor {
            horizon: 0,
            ..descriptor()
        };
        assert!(matches!(
            d.validate(),
            Err(GenError::InvalidArgument { name: "horizon", .. })
        ));
    }

    #[test]
    fn discount_bounds() {
        for bad in [-0.1, 1.01, f64::NAN] {
            let d = InstanceDescriptor {
                discount: bad,
                ..descriptor()
            };
            assert!(matches!(
                d.validate(),
                Err(GenError::InvalidArgument { name: "discount", .. })
            ));
        }
        for ok in [0.0, 1.0] {
            let d = InstanceDescriptor {
                discount: ok,
                ..descriptor()
            };
            assert!(d.validate().is_ok());
        }
    }

    #[test]
    fn sizes_must_be_positive() {
        assert!(check_sizes(1, 1).is_ok());
        for (x, y) in [(0, 3), (3, 0), (0, 0)] {
            assert!(matches!(
                check_sizes(x, y),
                Err(GenError::InvalidArgument { name: "size", .. })
            ));
        }
    }

    #[test]
    fn name_must_be_identifier() {
        let d = InstanceDescriptor {
            name: "bad name{".into(),
            ..descriptor()
        };
        assert!(d.validate().is_err());
    }
}
