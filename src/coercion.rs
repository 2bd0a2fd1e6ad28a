//! Type coercion of raw query-string values.
//!
//! Dispatch is on the [`TypeDescriptor`] tag. Numeric types parse strictly:
//! malformed input is an error, never a silent zero. Literal, text and
//! unrecognized types pass the raw string through untouched.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::registry::{Argument, TypeDescriptor};

/// A raw value that does not parse as its declared numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {expected}")]
pub struct CoercionError {
    /// The raw value as received.
    pub value: String,
    /// The declared type it failed to parse as.
    pub expected: TypeDescriptor,
}

impl CoercionError {
    fn new(value: &str, expected: &TypeDescriptor) -> Self {
        Self {
            value: value.to_string(),
            expected: expected.clone(),
        }
    }
}

/// Converts `raw` into the declared type.
///
/// # Errors
///
/// Returns [`CoercionError`] when an integer, real or list value is malformed.
///
/// # Examples
///
/// ```rust
/// use function_api::coercion::coerce;
/// use function_api::registry::{Argument, TypeDescriptor};
///
/// assert_eq!(coerce("42", &TypeDescriptor::Integer), Ok(Argument::Integer(42)));
/// assert!(coerce("4.2", &TypeDescriptor::Integer).is_err());
/// assert_eq!(
///     coerce("weekly", &TypeDescriptor::literal(["weekly"])),
///     Ok(Argument::Text("weekly".to_string()))
/// );
/// ```
pub fn coerce(raw: &str, type_descriptor: &TypeDescriptor) -> Result<Argument, CoercionError> {
    match type_descriptor {
        TypeDescriptor::Integer => parse_integer(raw)
            .map(Argument::Integer)
            .ok_or_else(|| CoercionError::new(raw, type_descriptor)),
        TypeDescriptor::Real => parse_real(raw)
            .map(Argument::Real)
            .ok_or_else(|| CoercionError::new(raw, type_descriptor)),
        TypeDescriptor::RealList => raw
            .split(',')
            .map(parse_real)
            .collect::<Option<Vec<_>>>()
            .map(Argument::RealList)
            .ok_or_else(|| CoercionError::new(raw, type_descriptor)),
        TypeDescriptor::Literal(_)
        | TypeDescriptor::Text
        | TypeDescriptor::Structured
        | TypeDescriptor::Unrecognized(_) => Ok(Argument::Text(raw.to_string())),
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parses plain (`12.50`) or scientific (`1.25e1`) decimal notation.
fn parse_real(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
