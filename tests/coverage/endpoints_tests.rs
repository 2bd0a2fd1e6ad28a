use crate::helpers::{BUNDLED_FUNCTIONS, TestClient, assert_json_has_key, key_positions};
use rstest::rstest;
use serde_json::json;

// =============================================================================
// E1: Listing Reachability
// =============================================================================

#[rstest]
#[case("/api")]
#[case("/api/")]
#[case("/json")]
#[case("/json/")]
#[tokio::test]
async fn e1_listing_returns_200_ok(#[case] path: &str) {
    let client = TestClient::bundled();

    let response = client.get(path).await;

    assert_eq!(response.status_code(), 200);
    assert_json_has_key(&response.body, "Available API Endpoints");
}

// =============================================================================
// E2: Listing Content
// =============================================================================

#[rstest]
#[tokio::test]
async fn e2_listing_includes_every_function() {
    let client = TestClient::bundled();

    let response = client.get("/api/").await;

    let endpoints = response.body["Available API Endpoints"]
        .as_object()
        .expect("endpoints object");
    assert_eq!(endpoints.len(), BUNDLED_FUNCTIONS.len());
    for name in BUNDLED_FUNCTIONS {
        assert_json_has_key(&response.body["Available API Endpoints"], name);
    }
}

#[rstest]
#[tokio::test]
async fn e2_listing_matches_declared_signature() {
    let client = TestClient::bundled();

    let response = client.get("/api/").await;

    assert_eq!(
        response.body["Available API Endpoints"]["take_home_pay"],
        json!({
            "args": {
                "gross_pay": ["float", null],
                "employer_match": ["float", null],
                "taxes_and_fees": ["list[float]", null]
            },
            "return_type": "float"
        })
    );
}

#[rstest]
#[tokio::test]
async fn e2_listing_shows_defaults_and_literals() {
    let client = TestClient::bundled();

    let response = client.get("/api/").await;
    let endpoints = &response.body["Available API Endpoints"];

    assert_eq!(
        endpoints["fi_number"]["args"]["withdrawal_rate"],
        json!(["float", "4"])
    );
    assert_eq!(
        endpoints["compound_growth"]["args"]["frequency"],
        json!(["Literal['annually', 'quarterly', 'monthly', 'daily']", "monthly"])
    );
    assert_eq!(endpoints["years_to_fi"]["return_type"], json!("int"));
    assert_eq!(endpoints["redeem_points"]["return_type"], json!("dict"));
}

// =============================================================================
// E3: Key Order
// =============================================================================

#[rstest]
#[tokio::test]
async fn e3_functions_are_listed_in_registration_order() {
    let client = TestClient::bundled();

    let response = client.get("/api/").await;

    let positions = key_positions(&response.text, &BUNDLED_FUNCTIONS);
    assert!(positions.is_sorted(), "{}", response.text);
}

#[rstest]
#[tokio::test]
async fn e3_parameters_are_listed_in_declaration_order() {
    let client = TestClient::bundled();

    let response = client.get("/api/").await;

    let positions = key_positions(
        &response.text,
        &["gross_pay", "employer_match", "taxes_and_fees"],
    );
    assert!(positions.is_sorted(), "{}", response.text);
}
