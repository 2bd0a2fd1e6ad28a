//! Type descriptors and runtime values exchanged with registered functions.
//!
//! A [`TypeDescriptor`] is the closed classification attached to every
//! parameter and return type at registration time. Coercion dispatches on
//! the descriptor tag; nothing downstream inspects annotation text.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

// =============================================================================
// TypeDescriptor
// =============================================================================

/// Declared type of a parameter or of a function's return value.
///
/// # Examples
///
/// ```rust
/// use function_api::registry::TypeDescriptor;
///
/// let frequency = TypeDescriptor::literal(["annually", "monthly"]);
/// assert_eq!(frequency.to_string(), "Literal['annually', 'monthly']");
/// assert_eq!(TypeDescriptor::Real.to_string(), "float");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Base-10 signed integer.
    Integer,
    /// Arbitrary-precision decimal number.
    Real,
    /// Free-form text.
    Text,
    /// One of a fixed set of strings. Membership is checked by the function.
    Literal(Vec<String>),
    /// Comma-joined list of decimal numbers.
    RealList,
    /// Mapping or other structured value. Only meaningful as a return type.
    Structured,
    /// Any annotation the adapter does not understand. Values pass through raw.
    Unrecognized(String),
}

impl TypeDescriptor {
    /// Creates a literal descriptor from the allowed values, keeping their order.
    #[must_use]
    pub fn literal<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Literal(allowed.into_iter().map(Into::into).collect())
    }

    /// Creates a descriptor for an annotation the adapter cannot coerce.
    #[must_use]
    pub fn unrecognized(annotation: impl Into<String>) -> Self {
        Self::Unrecognized(annotation.into())
    }

    /// Returns the allowed values of a literal descriptor.
    #[must_use]
    pub fn allowed_values(&self) -> Option<&[String]> {
        match self {
            Self::Literal(allowed) => Some(allowed),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(formatter, "int"),
            Self::Real => write!(formatter, "float"),
            Self::Text => write!(formatter, "str"),
            Self::Literal(allowed) => {
                write!(formatter, "Literal[")?;
                for (position, value) in allowed.iter().enumerate() {
                    if position > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "'{value}'")?;
                }
                write!(formatter, "]")
            }
            Self::RealList => write!(formatter, "list[float]"),
            Self::Structured => write!(formatter, "dict"),
            Self::Unrecognized(annotation) => write!(formatter, "{annotation}"),
        }
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Argument
// =============================================================================

/// A request parameter after coercion to its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Integer(i64),
    Real(Decimal),
    RealList(Vec<Decimal>),
    Text(String),
}

impl Argument {
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a decimal. Integers widen losslessly.
    #[must_use]
    pub fn as_real(&self) -> Option<Decimal> {
        match self {
            Self::Real(value) => Some(*value),
            Self::Integer(value) => Some(Decimal::from(*value)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_real_list(&self) -> Option<&[Decimal]> {
        match self {
            Self::RealList(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// The value a registered function returns.
///
/// Scalars and structured values are distinguished here, before any
/// rounding is attempted, so the formatter never has to recover from a
/// type mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Integer(i64),
    Real(Decimal),
    Text(String),
    Structured(serde_json::Value),
}

impl From<i64> for Output {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Output {
    fn from(value: Decimal) -> Self {
        Self::Real(value)
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Output {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<serde_json::Value> for Output {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}
