//! HTTP handlers.
//!
//! Handlers only translate between axum extractors and [`ApiFacade`]; every
//! decision lives in the facade.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::Html;

use crate::api::dto::{EndpointListing, HelpCatalog};
use crate::api::error::ApiError;
use crate::api::facade::{ApiFacade, html_requested};
use crate::api::routes::ROUTE_PATTERNS;
use crate::binding::QueryParameters;
use crate::formatting::FormattedResult;

/// Raw query pairs, in request order.
type QueryPairs = Query<Vec<(String, String)>>;

/// The `{name}` segment, kept even when it fails to decode.
type NameSegment = Result<Path<String>, PathRejection>;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Function API</title>
</head>
<body>
<h1>Function API</h1>
<ul>
<li><a href="/api/">Available endpoints</a></li>
<li><a href="/api/help/">Documentation</a> (<a href="/api/help/?html=true">HTML</a>)</li>
</ul>
</body>
</html>
"#;

// =============================================================================
// Landing Page
// =============================================================================

#[allow(clippy::unused_async)]
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

// =============================================================================
// Function Handlers
// =============================================================================

#[allow(clippy::unused_async)]
pub async fn list_endpoints(State(facade): State<ApiFacade>) -> Json<EndpointListing> {
    Json(facade.list_endpoints())
}

#[allow(clippy::unused_async)]
pub async fn invoke_endpoint(
    State(facade): State<ApiFacade>,
    name: NameSegment,
    Query(pairs): QueryPairs,
) -> Result<Json<FormattedResult>, ApiError> {
    let query = QueryParameters::new(pairs);
    facade.invoke(&function_name(name), &query).map(Json)
}

// =============================================================================
// Help Handlers
// =============================================================================

#[allow(clippy::unused_async)]
pub async fn help_all(
    State(facade): State<ApiFacade>,
    Query(pairs): QueryPairs,
) -> Json<HelpCatalog> {
    let query = QueryParameters::new(pairs);
    Json(facade.help_all(html_requested(&query)))
}

#[allow(clippy::unused_async)]
pub async fn help(
    State(facade): State<ApiFacade>,
    name: NameSegment,
    Query(pairs): QueryPairs,
) -> Result<Json<String>, ApiError> {
    let query = QueryParameters::new(pairs);
    facade.help(&function_name(name), html_requested(&query)).map(Json)
}

/// Registered names are never empty, so a segment that is not valid UTF-8
/// resolves to no function and gets the unknown-endpoint envelope.
fn function_name(segment: NameSegment) -> String {
    segment.map_or_else(
        |rejection| {
            tracing::debug!(%rejection, "Undecodable function name");
            String::new()
        },
        |Path(name)| name,
    )
}

// =============================================================================
// Fallback
// =============================================================================

#[allow(clippy::unused_async)]
pub async fn route_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::RouteNotFound {
        routes: ROUTE_PATTERNS.iter().map(ToString::to_string).collect(),
    }
}
