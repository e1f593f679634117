//! Field-level validation rules shared by the entity editor forms.
//!
//! Numeric fields arrive as raw text (the way a form input delivers them) and
//! are parsed here. Each rule returns the parsed value on success so callers
//! never parse twice.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::errors::ValidationError;

/// Accepted credibility scores for a source, inclusive on both ends.
pub const CREDIBILITY_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Accepted sampling temperatures for an AI model, inclusive on both ends.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Reject an empty required field.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when `value` is empty.
pub const fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// Check an address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] when the pattern does not match.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            value: value.to_string(),
        })
    }
}

/// Parse an absolute URL.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUrl`] for relative or malformed input.
pub fn absolute_url(value: &str) -> Result<Url, ValidationError> {
    Url::parse(value).map_err(|error| ValidationError::InvalidUrl {
        value: value.to_string(),
        reason: error.to_string(),
    })
}

fn finite_float(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

/// Parse a float that must fall inside `range` (inclusive).
///
/// # Errors
///
/// Returns [`ValidationError::NotANumber`] for unparseable or non-finite
/// input and [`ValidationError::OutOfRange`] outside the bounds.
pub fn float_in_range(
    field: &'static str,
    raw: &str,
    range: &RangeInclusive<f64>,
) -> Result<f64, ValidationError> {
    let value = finite_float(field, raw)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
            value,
        })
    }
}

/// Parse a float that must be zero or positive.
///
/// # Errors
///
/// Returns [`ValidationError::NotANumber`] or [`ValidationError::Negative`].
pub fn non_negative_float(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = finite_float(field, raw)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Parse an unsigned whole number.
///
/// # Errors
///
/// Returns [`ValidationError::NotAnInteger`] for anything `u32` rejects.
pub fn unsigned_integer(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            value: raw.to_string(),
        })
}
