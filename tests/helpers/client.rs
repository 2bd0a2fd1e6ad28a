use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use function_api::api::{ApiFacade, create_router};
use function_api::library;
use function_api::registry::Registry;

/// Drives a router in-process, one request per call.
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(registry: Registry) -> Self {
        Self {
            router: create_router(ApiFacade::new(registry)),
        }
    }

    /// Client over the bundled finance registry.
    pub fn bundled() -> Self {
        Self::new(library::registry().expect("bundled registry must build"))
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build GET request");
        self.send(request).await
    }

    /// GET carrying an `Origin` header, as a browser would send cross-site.
    pub async fn get_from_origin(&self, path: &str, origin: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .expect("Failed to build GET request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);

        TestResponse {
            status,
            body,
            text,
            headers,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: JsonValue,
    pub text: String,
    pub headers: HeaderMap,
}

impl TestResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
