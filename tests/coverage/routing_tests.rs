use crate::helpers::{TestClient, assert_error_envelope};
use function_api::api::routes::ROUTE_PATTERNS;
use rstest::rstest;

// =============================================================================
// R1: Landing Page
// =============================================================================

#[rstest]
#[tokio::test]
async fn r1_landing_page_returns_200_ok() {
    let client = TestClient::bundled();

    let response = client.get("/").await;

    assert_eq!(response.status_code(), 200);
    assert!(
        response
            .header("content-type")
            .is_some_and(|value| value.starts_with("text/html"))
    );
    assert!(response.text.contains("/api/help/"));
}

// =============================================================================
// R2: Unknown Routes
// =============================================================================

#[rstest]
#[case("/nada")]
#[case("/api/help/take_home_pay/extra")]
#[case("/json/h/take_home_pay/extra")]
#[case("/api/take_home_pay/extra")]
#[tokio::test]
async fn r2_unknown_route_returns_not_found_envelope(#[case] path: &str) {
    let client = TestClient::bundled();

    let response = client.get(path).await;

    assert_eq!(response.status_code(), 404);
    let message = assert_error_envelope(&response.body, 404, &ROUTE_PATTERNS);
    assert_eq!(message, "Not found. Only the following routes are available");
}

// =============================================================================
// R3: CORS
// =============================================================================

#[rstest]
#[tokio::test]
async fn r3_responses_allow_any_origin() {
    let client = TestClient::bundled();

    let response = client.get_from_origin("/api/", "http://example.com").await;

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[rstest]
#[tokio::test]
async fn r3_error_responses_carry_cors_headers() {
    let client = TestClient::bundled();

    let response = client
        .get_from_origin("/api/not_a_real_function", "http://example.com")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
