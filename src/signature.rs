//! Signature introspection over the declared registration table.

use crate::registry::{FunctionEntry, ParameterDescriptor, TypeDescriptor};

/// The HTTP-relevant contract of one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a> {
    parameters: &'a [ParameterDescriptor],
    return_type: &'a TypeDescriptor,
}

impl<'a> Signature<'a> {
    /// Parameters in declaration order, which is also positional-call order.
    #[must_use]
    pub const fn parameters(&self) -> &'a [ParameterDescriptor] {
        self.parameters
    }

    #[must_use]
    pub const fn return_type(&self) -> &'a TypeDescriptor {
        self.return_type
    }
}

/// Describes `entry` without copying its declarations.
#[must_use]
pub fn describe(entry: &FunctionEntry) -> Signature<'_> {
    Signature {
        parameters: entry.parameters(),
        return_type: entry.return_type(),
    }
}
