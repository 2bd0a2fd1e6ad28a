//! Routing definitions.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | / | `landing_page` | Landing page |
//! | GET | /api/ | `list_endpoints` | Describe every function |
//! | GET | /api/{name} | `invoke_endpoint` | Call a function |
//! | GET | /api/help/ | `help_all` | Documentation for every function |
//! | GET | /api/help/{name} | `help` | Documentation for one function |
//!
//! The same function routes are served under `/json`, with help at `/json/h`.
//! Collection routes answer with and without the trailing slash.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::api::facade::ApiFacade;
use crate::api::handlers;

/// Route patterns reported by the not-found envelope.
pub const ROUTE_PATTERNS: [&str; 9] = [
    "/",
    "/api/",
    "/api/{name}",
    "/api/help/",
    "/api/help/{name}",
    "/json/",
    "/json/{name}",
    "/json/h/",
    "/json/h/{name}",
];

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the router serving `facade`.
///
/// # Examples
///
/// ```ignore
/// use function_api::api::{ApiFacade, create_router};
///
/// let facade = ApiFacade::new(function_api::library::registry()?);
/// let router = create_router(facade);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(facade: ApiFacade) -> Router {
    Router::new()
        .route("/", get(handlers::landing_page))
        .merge(function_routes("/api", "/help"))
        .merge(function_routes("/json", "/h"))
        .fallback(handlers::route_not_found)
        .layer(create_cors_layer())
        .with_state(facade)
}

fn function_routes(prefix: &str, help: &str) -> Router<ApiFacade> {
    Router::new()
        .route(prefix, get(handlers::list_endpoints))
        .route(&format!("{prefix}/"), get(handlers::list_endpoints))
        .route(&format!("{prefix}/{{name}}"), get(handlers::invoke_endpoint))
        .route(&format!("{prefix}{help}"), get(handlers::help_all))
        .route(&format!("{prefix}{help}/"), get(handlers::help_all))
        .route(&format!("{prefix}{help}/{{name}}"), get(handlers::help))
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================
