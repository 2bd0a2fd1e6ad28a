//! HTTP layer: facade, error envelope, response bodies and routing.

pub mod dto;
pub mod error;
pub mod facade;
pub mod handlers;
pub mod routes;

pub use dto::{EndpointListing, HelpCatalog};
pub use error::{ApiError, ErrorEnvelope};
pub use facade::ApiFacade;
pub use routes::create_router;
