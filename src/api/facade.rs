//! Request orchestration over the function registry.
//!
//! The facade owns no per-request state. It resolves a function by name,
//! binds the query against the declared signature, invokes the function and
//! formats the result; help requests skip straight to the documentation
//! transformer.

use std::sync::Arc;

use crate::api::dto::{EndpointListing, HelpCatalog};
use crate::api::error::ApiError;
use crate::binding::{Binding, QueryParameters, bind};
use crate::documentation;
use crate::formatting::{FormattedResult, format, parse_precision};
use crate::registry::{FunctionEntry, Registry};
use crate::signature::describe;

/// Query parameter carrying the requested rounding precision.
pub const ROUND_PARAMETER: &str = "round";

/// Query parameter enabling HTML help.
pub const HTML_PARAMETER: &str = "html";

#[derive(Debug, Clone)]
pub struct ApiFacade {
    registry: Arc<Registry>,
}

impl ApiFacade {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    #[must_use]
    pub const fn from_shared(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Describes every registered function.
    #[must_use]
    pub fn list_endpoints(&self) -> EndpointListing {
        self.registry.entries().iter().collect()
    }

    /// Invokes `name` with arguments bound from `query`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnknownEndpoint`] if no function is registered as `name`
    /// - [`ApiError::MissingParameters`] if any declared parameter is absent
    /// - [`ApiError::InvalidParameter`] if a value cannot be coerced
    /// - [`ApiError::NotAllowed`] or [`ApiError::InvalidArgument`] if the
    ///   function rejects an argument
    /// - [`ApiError::Internal`] if the function fails
    pub fn invoke(&self, name: &str, query: &QueryParameters) -> Result<FormattedResult, ApiError> {
        let entry = self.resolve(name)?;
        let signature = describe(entry);

        let arguments = match bind(signature.parameters(), query) {
            Ok(Binding::Bound(arguments)) => arguments,
            Ok(Binding::Unbound(required)) => {
                tracing::debug!(function = name, ?required, "Missing GET parameters");
                return Err(ApiError::missing_parameters(required));
            }
            Err(error) => {
                tracing::debug!(function = name, %error, "Rejected GET parameter");
                return Err(error.into());
            }
        };

        let output = entry.invoke(&arguments).map_err(|error| {
            if error.is_client_error() {
                tracing::debug!(function = name, %error, "Function rejected arguments");
            } else {
                tracing::warn!(function = name, %error, "Function invocation failed");
            }
            ApiError::from(error)
        })?;

        let precision = parse_precision(query.get(ROUND_PARAMETER));
        tracing::debug!(function = name, ?precision, "Function invoked");

        Ok(format(output, precision))
    }

    /// Documentation for every registered function, keyed by name.
    #[must_use]
    pub fn help_all(&self, html: bool) -> HelpCatalog {
        self.registry
            .entries()
            .iter()
            .map(|entry| {
                (
                    entry.name().to_string(),
                    documentation::render(entry.documentation(), html),
                )
            })
            .collect()
    }

    /// Documentation for one function.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownEndpoint`] if no function is registered as
    /// `name`.
    pub fn help(&self, name: &str, html: bool) -> Result<String, ApiError> {
        let entry = self.resolve(name)?;
        Ok(documentation::render(entry.documentation(), html))
    }

    fn resolve(&self, name: &str) -> Result<&FunctionEntry, ApiError> {
        self.registry.get(name).ok_or_else(|| {
            tracing::debug!(function = name, "Unknown endpoint requested");
            ApiError::unknown_endpoint(self.registry.names().map(str::to_string).collect())
        })
    }
}

/// Reads the HTML help flag; only the exact value `true` enables it.
#[must_use]
pub fn html_requested(query: &QueryParameters) -> bool {
    query.get(HTML_PARAMETER) == Some("true")
}
