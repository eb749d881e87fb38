//! Error types for instance generation.
//!
//! Every validation failure is detected before any random draw or file
//! write, so a returned [`GenError`] never leaves partial output behind.

use thiserror::Error;

/// Convenience alias used across the generator crates.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors arising from configuration validation and literal parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenError {
    /// A scalar option is outside its accepted domain (non-positive size or
    /// horizon, discount outside `[0, 1]`, unknown mode string, ...).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending option.
        name: &'static str,
        /// Human-readable description of the valid domain.
        reason: String,
    },
    /// A position literal could not be parsed into an in-bounds cell.
    #[error("malformed position `{input}`: {reason}")]
    Format {
        /// The literal as supplied by the caller.
        input: String,
        /// What went wrong.
        reason: String,
    },
    /// A neighbour omission is not of the `from->to` shape.
    #[error("unrecognised neighbour omission `{input}` (expected `x1,y1->x2,y2`)")]
    UnknownRelationOmission {
        /// The omission string as supplied by the caller.
        input: String,
    },
}

impl GenError {
    /// Shorthand for [`GenError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`GenError::Format`].
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error belongs to the invalid-argument class: bad scalar
    /// options and malformed position literals.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::Format { .. })
    }
}
