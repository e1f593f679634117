//! Error types for Newsroom's core types.
//!
//! Store and session errors live in their own crates (`StoreError`,
//! `AuthError`). Everything converges into `anyhow` in `news-cli`.

use thiserror::Error;

/// A string did not name any variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// A field-specific reason an editor form was rejected.
///
/// Validation failures never touch the store: the save is aborted and the
/// message is surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    #[error("'{value}' is not a valid URL: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

impl ValidationError {
    /// The form field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::NotANumber { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Negative { field, .. } => field,
            Self::InvalidEmail { .. } => "email",
            Self::InvalidUrl { .. } => "url",
        }
    }
}
