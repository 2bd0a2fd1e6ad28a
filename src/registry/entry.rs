//! Function entries and their builder.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{Argument, Output, TypeDescriptor};
use super::RegistryError;

// =============================================================================
// ParameterDescriptor
// =============================================================================

/// A declared parameter: name, type and the default shown in the listing.
///
/// The default is informational only. Every parameter is required when the
/// function is invoked over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    type_descriptor: TypeDescriptor,
    default: Option<String>,
}

impl ParameterDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

// =============================================================================
// InvocationError
// =============================================================================

/// Failure reported by a registered function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// A literal parameter received a value outside its allowed set.
    #[error("parameter '{parameter}' must be one of {allowed:?}")]
    NotAllowed {
        parameter: String,
        allowed: Vec<String>,
    },

    /// The function rejected a well-typed value (zero divisor, out of range).
    #[error("invalid value for parameter '{parameter}': {reason}")]
    InvalidArgument { parameter: String, reason: String },

    #[error("function failed: {0}")]
    Failed(String),
}

impl InvocationError {
    #[must_use]
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

// =============================================================================
// Arguments
// =============================================================================

/// Bound arguments as seen by a handler, paired with their declarations.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    parameters: &'a [ParameterDescriptor],
    values: &'a [Argument],
}

impl<'a> Arguments<'a> {
    #[must_use]
    pub const fn new(parameters: &'a [ParameterDescriptor], values: &'a [Argument]) -> Self {
        Self { parameters, values }
    }

    /// Returns the raw argument at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::Failed`] if no argument was bound there.
    pub fn get(&self, index: usize) -> Result<&'a Argument, InvocationError> {
        self.values
            .get(index)
            .ok_or_else(|| InvocationError::failed(format!("no argument bound at position {index}")))
    }

    /// # Errors
    ///
    /// Returns [`InvocationError::Failed`] if the argument is not an integer.
    pub fn integer(&self, index: usize) -> Result<i64, InvocationError> {
        self.get(index)?
            .as_integer()
            .ok_or_else(|| self.mismatch(index, "int"))
    }

    /// # Errors
    ///
    /// Returns [`InvocationError::Failed`] if the argument is not numeric.
    pub fn real(&self, index: usize) -> Result<Decimal, InvocationError> {
        self.get(index)?
            .as_real()
            .ok_or_else(|| self.mismatch(index, "float"))
    }

    /// # Errors
    ///
    /// Returns [`InvocationError::Failed`] if the argument is not a list.
    pub fn real_list(&self, index: usize) -> Result<&'a [Decimal], InvocationError> {
        self.get(index)?
            .as_real_list()
            .ok_or_else(|| self.mismatch(index, "list[float]"))
    }

    /// # Errors
    ///
    /// Returns [`InvocationError::Failed`] if the argument is not text.
    pub fn text(&self, index: usize) -> Result<&'a str, InvocationError> {
        self.get(index)?
            .as_text()
            .ok_or_else(|| self.mismatch(index, "str"))
    }

    /// Returns a literal argument after checking it against the declared set.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::NotAllowed`] when the value is not one of
    /// the allowed strings.
    pub fn literal(&self, index: usize) -> Result<&'a str, InvocationError> {
        let value = self.text(index)?;
        let Some(allowed) = self
            .parameters
            .get(index)
            .and_then(|parameter| parameter.type_descriptor().allowed_values())
        else {
            return Ok(value);
        };
        if allowed.iter().any(|candidate| candidate == value) {
            Ok(value)
        } else {
            Err(InvocationError::NotAllowed {
                parameter: self.name(index).to_string(),
                allowed: allowed.to_vec(),
            })
        }
    }

    /// Name of the parameter at `index`, or `"?"` when undeclared.
    #[must_use]
    pub fn name(&self, index: usize) -> &'a str {
        self.parameters
            .get(index)
            .map_or("?", ParameterDescriptor::name)
    }

    fn mismatch(&self, index: usize, expected: &str) -> InvocationError {
        InvocationError::failed(format!(
            "argument '{}' is not a {expected}",
            self.name(index)
        ))
    }
}

// =============================================================================
// FunctionEntry
// =============================================================================

/// Callable stored in the registry.
pub type Handler = Arc<dyn Fn(Arguments<'_>) -> Result<Output, InvocationError> + Send + Sync>;

/// One registered function with its declared contract.
#[derive(Clone)]
pub struct FunctionEntry {
    name: String,
    parameters: Vec<ParameterDescriptor>,
    return_type: TypeDescriptor,
    documentation: Option<String>,
    handler: Handler,
}

impl FunctionEntry {
    /// Starts building an entry named `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use function_api::registry::{Argument, FunctionEntry, Output, TypeDescriptor};
    ///
    /// let double = FunctionEntry::builder("double")
    ///     .parameter("value", TypeDescriptor::Integer)
    ///     .returns(TypeDescriptor::Integer)
    ///     .documentation("Double a number.")
    ///     .handler(|arguments| Ok(Output::Integer(arguments.integer(0)? * 2)))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(double.invoke(&[Argument::Integer(21)]), Ok(Output::Integer(42)));
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> FunctionEntryBuilder {
        FunctionEntryBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    #[must_use]
    pub const fn return_type(&self) -> &TypeDescriptor {
        &self.return_type
    }

    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Calls the function with positional arguments in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::Failed`] if the argument count does not
    /// match the declaration, otherwise whatever the function reports.
    pub fn invoke(&self, arguments: &[Argument]) -> Result<Output, InvocationError> {
        if arguments.len() != self.parameters.len() {
            return Err(InvocationError::failed(format!(
                "{} expects {} arguments, got {}",
                self.name,
                self.parameters.len(),
                arguments.len()
            )));
        }
        (self.handler)(Arguments::new(&self.parameters, arguments))
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionEntry")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .field("documentation", &self.documentation)
            .field("handler", &"<fn>")
            .finish()
    }
}

// =============================================================================
// FunctionEntryBuilder
// =============================================================================

pub struct FunctionEntryBuilder {
    name: String,
    parameters: Vec<ParameterDescriptor>,
    return_type: TypeDescriptor,
    documentation: Option<String>,
    handler: Option<Handler>,
}

impl FunctionEntryBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeDescriptor::unrecognized("unannotated"),
            documentation: None,
            handler: None,
        }
    }

    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        self.parameters
            .push(ParameterDescriptor::new(name, type_descriptor));
        self
    }

    #[must_use]
    pub fn parameter_with_default(
        mut self,
        name: impl Into<String>,
        type_descriptor: TypeDescriptor,
        default: impl Into<String>,
    ) -> Self {
        self.parameters
            .push(ParameterDescriptor::new(name, type_descriptor).with_default(default));
        self
    }

    #[must_use]
    pub fn returns(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = return_type;
        self
    }

    #[must_use]
    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Arguments<'_>) -> Result<Output, InvocationError> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Validates the declaration and produces the entry.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyName`] if the function name is blank
    /// - [`RegistryError::DuplicateParameter`] if two parameters share a name
    /// - [`RegistryError::MissingHandler`] if no handler was supplied
    pub fn build(self) -> Result<FunctionEntry, RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if !seen.insert(parameter.name()) {
                return Err(RegistryError::DuplicateParameter {
                    function: self.name,
                    parameter: parameter.name().to_string(),
                });
            }
        }

        let handler = self
            .handler
            .ok_or_else(|| RegistryError::MissingHandler(self.name.clone()))?;

        Ok(FunctionEntry {
            name: self.name,
            parameters: self.parameters,
            return_type: self.return_type,
            documentation: self.documentation,
            handler,
        })
    }
}
