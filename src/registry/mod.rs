//! The function registry.
//!
//! The registry is an explicit, statically declared table of functions built
//! once at startup. Each [`FunctionEntry`] carries its ordered parameter list,
//! its return type and its documentation, so the HTTP contract can be derived
//! from the declarations alone.
//!
//! # Example
//!
//! ```rust
//! use function_api::registry::{FunctionEntry, Output, Registry, TypeDescriptor};
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(
//!         FunctionEntry::builder("answer")
//!             .returns(TypeDescriptor::Integer)
//!             .handler(|_| Ok(Output::Integer(42)))
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(registry.names().collect::<Vec<_>>(), ["answer"]);
//! ```

mod entry;
mod types;

use std::collections::HashMap;

use thiserror::Error;

pub use entry::{
    Arguments, FunctionEntry, FunctionEntryBuilder, Handler, InvocationError, ParameterDescriptor,
};
pub use types::{Argument, Output, TypeDescriptor};

/// Errors raised while declaring or registering functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function name must not be empty")]
    EmptyName,

    #[error("function '{0}' is already registered")]
    DuplicateFunction(String),

    #[error("function '{function}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { function: String, parameter: String },

    #[error("function '{0}' has no handler")]
    MissingHandler(String),
}

/// Insertion-ordered collection of functions addressable by name.
///
/// Read-only once the server starts; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<FunctionEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateFunction`] if two entries share a name.
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = FunctionEntry>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry)?;
        }
        Ok(registry)
    }

    /// Adds an entry at the end of the table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateFunction`] if the name is taken.
    pub fn register(&mut self, entry: FunctionEntry) -> Result<(), RegistryError> {
        if self.index.contains_key(entry.name()) {
            return Err(RegistryError::DuplicateFunction(entry.name().to_string()));
        }
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up a function by exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Function names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FunctionEntry::name)
    }

    #[must_use]
    pub fn entries(&self) -> &[FunctionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
