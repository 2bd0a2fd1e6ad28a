//! Deterministic rendering of function results.
//!
//! Scalars always leave as JSON strings so that no serialization layer gets
//! a chance to reinterpret the digits as a binary float. Structured results
//! are the one exception: under rounding they pass through untouched.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::registry::Output;

/// Largest number of fractional digits the decimal type can represent.
pub const MAX_PRECISION: u32 = 28;

/// A result ready to be written as the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedResult {
    /// Serialized as a JSON string scalar.
    StringValue(String),
    /// Serialized as-is.
    RawStructured(serde_json::Value),
}

impl Serialize for FormattedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::StringValue(value) => serializer.serialize_str(value),
            Self::RawStructured(value) => value.serialize(serializer),
        }
    }
}

/// Reads the `round` query value.
///
/// Absent, empty, negative and non-numeric values all mean "do not round".
#[must_use]
pub fn parse_precision(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<u32>().ok())
}

/// Formats `output`, rounding to `precision` decimal places when requested.
///
/// # Examples
///
/// ```rust
/// use function_api::formatting::{FormattedResult, format};
/// use function_api::registry::Output;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Output::Real(Decimal::from_str("2.675").unwrap());
///
/// assert_eq!(format(value.clone(), None), FormattedResult::StringValue("2.675".into()));
/// assert_eq!(format(value.clone(), Some(2)), FormattedResult::StringValue("2.68".into()));
/// assert_eq!(format(value, Some(0)), FormattedResult::StringValue("3".into()));
/// ```
#[must_use]
pub fn format(output: Output, precision: Option<u32>) -> FormattedResult {
    match precision {
        None => FormattedResult::StringValue(render(output)),
        Some(places) => round_output(output, places),
    }
}

/// Quantizes to `10^-precision` with ties away from zero, then normalizes.
#[must_use]
pub fn round_half_up(value: Decimal, precision: u32) -> Decimal {
    value
        .round_dp_with_strategy(
            precision.min(MAX_PRECISION),
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize()
}

fn render(output: Output) -> String {
    match output {
        Output::Integer(value) => value.to_string(),
        Output::Real(value) => value.to_string(),
        Output::Text(value) => value,
        Output::Structured(value) => value.to_string(),
    }
}

fn round_output(output: Output, places: u32) -> FormattedResult {
    let value = match output {
        Output::Integer(value) => Decimal::from(value),
        Output::Real(value) => value,
        Output::Text(text) => match Decimal::from_str(text.trim()) {
            Ok(value) => value,
            Err(_) => return FormattedResult::StringValue(text),
        },
        Output::Structured(value) => return FormattedResult::RawStructured(value),
    };
    FormattedResult::StringValue(render_rounded(round_half_up(value, places)))
}

fn render_rounded(value: Decimal) -> String {
    if value.fract().is_zero() {
        value.trunc().normalize().to_string()
    } else {
        value.to_string()
    }
}
