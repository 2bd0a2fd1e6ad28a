//! API error types and the uniform error envelope.
//!
//! Every client-visible failure is serialized the same way so callers can
//! always read `error.message` to find the acceptable values:
//!
//! ```json
//! {
//!     "error": {
//!         "code": 400,
//!         "message": {
//!             "You did not pass all of the required GET parameters. The following are required": [
//!                 "gross_pay", "employer_match", "taxes_and_fees"
//!             ]
//!         }
//!     }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::binding::BindingError;
use crate::registry::InvocationError;

// =============================================================================
// ErrorEnvelope
// =============================================================================

/// Wire form of an error: a code, one message and the list it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub message: String,
    pub required: Vec<String>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>, required: Vec<String>) -> Self {
        Self {
            code,
            message: message.into(),
            required,
        }
    }
}

impl Serialize for ErrorEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wrapper<'a> {
            error: Body<'a>,
        }

        #[derive(Serialize)]
        struct Body<'a> {
            code: u16,
            message: Message<'a>,
        }

        struct Message<'a> {
            text: &'a str,
            required: &'a [String],
        }

        impl Serialize for Message<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.text, self.required)?;
                map.end()
            }
        }

        Wrapper {
            error: Body {
                code: self.code,
                message: Message {
                    text: &self.message,
                    required: &self.required,
                },
            },
        }
        .serialize(serializer)
    }
}

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not a valid endpoint")]
    UnknownEndpoint { available: Vec<String> },

    #[error("missing required GET parameters")]
    MissingParameters { required: Vec<String> },

    #[error("invalid value '{value}' for GET parameter '{parameter}', expected {expected}")]
    InvalidParameter {
        parameter: String,
        expected: String,
        value: String,
    },

    #[error("value for GET parameter '{parameter}' is not allowed")]
    NotAllowed {
        parameter: String,
        allowed: Vec<String>,
    },

    #[error("invalid value for GET parameter '{parameter}': {reason}")]
    InvalidArgument { parameter: String, reason: String },

    #[error("route not found")]
    RouteNotFound { routes: Vec<String> },

    #[error("internal server error: {message}")]
    Internal { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn unknown_endpoint(available: Vec<String>) -> Self {
        Self::UnknownEndpoint { available }
    }

    #[must_use]
    pub const fn missing_parameters(required: Vec<String>) -> Self {
        Self::MissingParameters { required }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<BindingError> for ApiError {
    fn from(error: BindingError) -> Self {
        Self::InvalidParameter {
            parameter: error.parameter,
            expected: error.source.expected.to_string(),
            value: error.source.value,
        }
    }
}

impl From<InvocationError> for ApiError {
    fn from(error: InvocationError) -> Self {
        match error {
            InvocationError::NotAllowed { parameter, allowed } => {
                Self::NotAllowed { parameter, allowed }
            }
            InvocationError::InvalidArgument { parameter, reason } => {
                Self::InvalidArgument { parameter, reason }
            }
            InvocationError::Failed(message) => Self::Internal { message },
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownEndpoint { .. }
            | Self::MissingParameters { .. }
            | Self::InvalidParameter { .. }
            | Self::NotAllowed { .. }
            | Self::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn envelope(&self) -> ErrorEnvelope {
        let code = self.status_code().as_u16();
        match self {
            Self::UnknownEndpoint { available } => ErrorEnvelope::new(
                code,
                "Not a valid endpoint. Only the following endpoints are allowed",
                available.clone(),
            ),
            Self::MissingParameters { required } => ErrorEnvelope::new(
                code,
                "You did not pass all of the required GET parameters. The following are required",
                required.clone(),
            ),
            Self::InvalidParameter {
                parameter,
                expected,
                value,
            } => ErrorEnvelope::new(
                code,
                format!(
                    "Invalid value '{value}' for GET parameter '{parameter}'. The following type is required"
                ),
                vec![expected.clone()],
            ),
            Self::NotAllowed { parameter, allowed } => ErrorEnvelope::new(
                code,
                format!(
                    "Invalid value for GET parameter '{parameter}'. Only the following values are allowed"
                ),
                allowed.clone(),
            ),
            Self::InvalidArgument { parameter, reason } => ErrorEnvelope::new(
                code,
                format!("Invalid value for GET parameter '{parameter}': {reason}"),
                vec![parameter.clone()],
            ),
            Self::RouteNotFound { routes } => ErrorEnvelope::new(
                code,
                "Not found. Only the following routes are available",
                routes.clone(),
            ),
            Self::Internal { message } => {
                ErrorEnvelope::new(code, format!("Internal server error: {message}"), Vec::new())
            }
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if !self.is_client_error() {
            tracing::error!(error = %self, "Responding with server error");
        }
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
