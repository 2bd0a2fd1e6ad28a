//! Response bodies for the listing and help endpoints.
//!
//! Both bodies are JSON objects keyed by function name. They serialize
//! through ordered maps so keys appear in registration order, and parameter
//! keys in declaration order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::registry::{FunctionEntry, ParameterDescriptor};
use crate::signature::describe;

// =============================================================================
// Endpoint Listing
// =============================================================================

/// Body of the listing endpoint.
///
/// ```json
/// {
///     "Available API Endpoints": {
///         "rule_of_72": {
///             "args": {"rate": ["float", null]},
///             "return_type": "float"
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointListing {
    pub endpoints: Vec<EndpointResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub name: String,
    pub arguments: Vec<ArgumentResponse>,
    pub return_type: String,
}

/// One parameter row, serialized as `[type, default]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentResponse {
    pub name: String,
    pub type_name: String,
    pub default: Option<String>,
}

impl From<&ParameterDescriptor> for ArgumentResponse {
    fn from(parameter: &ParameterDescriptor) -> Self {
        Self {
            name: parameter.name().to_string(),
            type_name: parameter.type_descriptor().to_string(),
            default: parameter.default().map(str::to_string),
        }
    }
}

impl From<&FunctionEntry> for EndpointResponse {
    fn from(entry: &FunctionEntry) -> Self {
        let signature = describe(entry);
        Self {
            name: entry.name().to_string(),
            arguments: signature
                .parameters()
                .iter()
                .map(ArgumentResponse::from)
                .collect(),
            return_type: signature.return_type().to_string(),
        }
    }
}

impl<'a> FromIterator<&'a FunctionEntry> for EndpointListing {
    fn from_iter<I: IntoIterator<Item = &'a FunctionEntry>>(iter: I) -> Self {
        Self {
            endpoints: iter.into_iter().map(EndpointResponse::from).collect(),
        }
    }
}

impl Serialize for EndpointListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Endpoints<'a>(&'a [EndpointResponse]);

        impl Serialize for Endpoints<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for endpoint in self.0 {
                    map.serialize_entry(&endpoint.name, endpoint)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Available API Endpoints", &Endpoints(&self.endpoints))?;
        map.end()
    }
}

impl Serialize for EndpointResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Arguments<'a>(&'a [ArgumentResponse]);

        impl Serialize for Arguments<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for argument in self.0 {
                    map.serialize_entry(&argument.name, &(&argument.type_name, &argument.default))?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("args", &Arguments(&self.arguments))?;
        map.serialize_entry("return_type", &self.return_type)?;
        map.end()
    }
}

// =============================================================================
// Help Catalog
// =============================================================================

/// Body of the all-help endpoint: `{name: documentation}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCatalog {
    pub entries: Vec<(String, String)>,
}

impl HelpCatalog {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, text)| text.as_str())
    }
}

impl FromIterator<(String, String)> for HelpCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for HelpCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, text) in &self.entries {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}
