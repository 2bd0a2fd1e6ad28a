//! Binding declared parameters to request values.
//!
//! Every declared parameter is required. Binding walks the parameters in
//! declaration order and stops at the first one the request does not supply;
//! the failure reports the complete parameter list, not the missing name.

use thiserror::Error;

use crate::coercion::{CoercionError, coerce};
use crate::registry::{Argument, ParameterDescriptor};

// =============================================================================
// QueryParameters
// =============================================================================

/// Raw query-string pairs in the order they were received.
///
/// Lookups are exact and case-sensitive. A repeated key resolves to its
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    #[must_use]
    pub const fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Vec<(String, String)>> for QueryParameters {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

// =============================================================================
// Binding
// =============================================================================

/// Outcome of matching a request against a function's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Every parameter was supplied; arguments are in positional order.
    Bound(Vec<Argument>),
    /// At least one parameter was missing; carries every required name.
    Unbound(Vec<String>),
}

/// A supplied value that failed coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("GET parameter '{parameter}' is invalid: {source}")]
pub struct BindingError {
    pub parameter: String,
    pub source: CoercionError,
}

/// Binds `parameters` against `query`.
///
/// # Errors
///
/// Returns [`BindingError`] if a supplied value cannot be coerced. A value
/// is coerced as soon as it is reached, so a malformed early parameter is
/// reported even when a later one is missing.
///
/// # Examples
///
/// ```rust
/// use function_api::binding::{Binding, QueryParameters, bind};
/// use function_api::registry::{Argument, ParameterDescriptor, TypeDescriptor};
///
/// let parameters = [
///     ParameterDescriptor::new("years", TypeDescriptor::Integer),
///     ParameterDescriptor::new("label", TypeDescriptor::Text),
/// ];
///
/// let query: QueryParameters = [("label", "x"), ("years", "3")].into_iter().collect();
/// assert_eq!(
///     bind(&parameters, &query).unwrap(),
///     Binding::Bound(vec![Argument::Integer(3), Argument::Text("x".into())])
/// );
///
/// let partial: QueryParameters = [("years", "3")].into_iter().collect();
/// assert_eq!(
///     bind(&parameters, &partial).unwrap(),
///     Binding::Unbound(vec!["years".into(), "label".into()])
/// );
/// ```
pub fn bind(
    parameters: &[ParameterDescriptor],
    query: &QueryParameters,
) -> Result<Binding, BindingError> {
    let mut arguments = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let Some(raw) = query.get(parameter.name()) else {
            return Ok(Binding::Unbound(required_names(parameters)));
        };
        let argument =
            coerce(raw, parameter.type_descriptor()).map_err(|source| BindingError {
                parameter: parameter.name().to_string(),
                source,
            })?;
        arguments.push(argument);
    }

    Ok(Binding::Bound(arguments))
}

fn required_names(parameters: &[ParameterDescriptor]) -> Vec<String> {
    parameters
        .iter()
        .map(|parameter| parameter.name().to_string())
        .collect()
}
