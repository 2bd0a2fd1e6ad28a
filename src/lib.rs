//! # function-api
//!
//! Exposes a registry of typed functions as a queryable HTTP/JSON API without
//! a hand-written route per function.
//!
//! ## Overview
//!
//! Each registered function declares its ordered parameters, their types and
//! its return type. From those declarations the crate:
//!
//! - **Describes** every function as an endpoint listing
//! - **Binds and coerces** query-string values to the declared types
//! - **Formats** results as JSON strings, with optional round-half-up
//! - **Renders documentation** as plain text or light HTML
//!
//! ## Modules
//!
//! - [`registry`]: function declarations and the registry table
//! - [`coercion`]: string to typed argument conversion
//! - [`signature`]: the HTTP-relevant view of a declaration
//! - [`binding`]: query parameters to positional arguments
//! - [`formatting`]: result rendering and rounding
//! - [`documentation`]: docstring cleanup and HTML rendering
//! - [`api`]: facade, error envelope and axum router
//! - [`infrastructure`]: configuration and server lifecycle
//! - [`library`]: the bundled personal-finance functions
//!
//! ## Example
//!
//! ```rust
//! use function_api::api::ApiFacade;
//! use function_api::binding::QueryParameters;
//! use function_api::formatting::FormattedResult;
//!
//! let facade = ApiFacade::new(function_api::library::registry().unwrap());
//! let query: QueryParameters = [
//!     ("gross_pay", "5000"),
//!     ("employer_match", "1000"),
//!     ("taxes_and_fees", "3000"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(
//!     facade.invoke("take_home_pay", &query).unwrap(),
//!     FormattedResult::StringValue("3000".to_string())
//! );
//! ```

pub mod api;
pub mod binding;
pub mod coercion;
pub mod documentation;
pub mod formatting;
pub mod infrastructure;
pub mod library;
pub mod registry;
pub mod signature;
