use crate::helpers::{BUNDLED_FUNCTIONS, TestClient, assert_error_envelope};
use rstest::rstest;
use serde_json::json;

const MISSING_PARAMETERS: &str =
    "You did not pass all of the required GET parameters. The following are required";
const UNKNOWN_ENDPOINT: &str = "Not a valid endpoint. Only the following endpoints are allowed";
const TAKE_HOME_PAY_PARAMETERS: [&str; 3] = ["gross_pay", "employer_match", "taxes_and_fees"];

// =============================================================================
// I1: Successful Invocation
// =============================================================================

#[rstest]
#[case("/api/take_home_pay?gross_pay=5000&employer_match=1000&taxes_and_fees=3000", "3000")]
#[case(
    "/api/take_home_pay?gross_pay=5000&employer_match=600&taxes_and_fees=2000,500,400",
    "2700"
)]
#[case(
    "/json/take_home_pay?gross_pay=5000&employer_match=1000&taxes_and_fees=3000",
    "3000"
)]
#[case(
    "/json/take_home_pay?gross_pay=5000&employer_match=600&taxes_and_fees=2000,500,400",
    "2700"
)]
#[tokio::test]
async fn i1_take_home_pay_returns_string_scalar(#[case] path: &str, #[case] expected: &str) {
    let client = TestClient::bundled();

    let response = client.get(path).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body, json!(expected));
}

#[rstest]
#[tokio::test]
async fn i1_query_order_does_not_matter() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/take_home_pay?taxes_and_fees=3000&employer_match=1000&gross_pay=5000")
        .await;

    assert_eq!(response.body, json!("3000"));
}

#[rstest]
#[tokio::test]
async fn i1_percent_encoded_list_is_decoded() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/take_home_pay?gross_pay=5000&employer_match=600&taxes_and_fees=2000%2C500%2C400")
        .await;

    assert_eq!(response.body, json!("2700"));
}

#[rstest]
#[tokio::test]
async fn i1_integer_result_is_string() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/years_to_fi?net_worth=10000&yearly_savings=20000&annual_return=7&fi_target=500000")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body, json!("15"));
}

#[rstest]
#[tokio::test]
async fn i1_literal_parameter_accepts_allowed_value() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/compound_growth?principal=1000&annual_rate=10&years=2&frequency=annually&round=2")
        .await;

    assert_eq!(response.body, json!("1210"));
}

#[rstest]
#[tokio::test]
async fn i1_repeated_parameter_uses_first_value() {
    let client = TestClient::bundled();

    let response = client.get("/api/rule_of_72?interest_rate=8&interest_rate=6").await;

    assert_eq!(response.body, json!("9"));
}

// =============================================================================
// I2: Rounding
// =============================================================================

#[rstest]
#[case("2", "1220.39")]
#[case("0", "1220")]
#[case("-1", "")]
#[case("abc", "")]
#[tokio::test]
async fn i2_round_parameter(#[case] round: &str, #[case] expected: &str) {
    let client = TestClient::bundled();

    let response = client
        .get(&format!(
            "/api/compound_growth?principal=1000&annual_rate=10&years=2&frequency=monthly&round={round}"
        ))
        .await;

    assert_eq!(response.status_code(), 200);
    let value = response.body.as_str().expect("string scalar");
    if expected.is_empty() {
        assert!(value.starts_with("1220.39096"), "{value}");
    } else {
        assert_eq!(value, expected);
    }
}

#[rstest]
#[tokio::test]
async fn i2_rounding_integral_value_drops_fraction() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/take_home_pay?gross_pay=5000.004&employer_match=0&taxes_and_fees=0&round=2")
        .await;

    assert_eq!(response.body, json!("5000"));
}

#[rstest]
#[tokio::test]
async fn i2_rounding_is_half_up() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/take_home_pay?gross_pay=2.675&employer_match=0&taxes_and_fees=0&round=2")
        .await;

    assert_eq!(response.body, json!("2.68"));
}

#[rstest]
#[tokio::test]
async fn i2_structured_result_passes_through_when_rounding() {
    let client = TestClient::bundled();

    let response = client.get("/api/redeem_points?points=1000&round=2").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.body,
        json!({
            "points": 1000,
            "cash_back": "10",
            "travel_portal": "12.5",
            "premium_travel_portal": "15"
        })
    );
}

#[rstest]
#[tokio::test]
async fn i2_structured_result_is_json_text_without_rounding() {
    let client = TestClient::bundled();

    let response = client.get("/api/redeem_points?points=1000").await;

    let text = response.body.as_str().expect("string scalar");
    let parsed: serde_json::Value = serde_json::from_str(text).expect("embedded JSON");
    assert_eq!(parsed["cash_back"], json!("10"));
}

// =============================================================================
// I3: Unknown Endpoint
// =============================================================================

#[rstest]
#[case("/api/not_a_real_function")]
#[case("/json/not_a_real_function")]
#[case("/api/Take_Home_Pay")]
#[case("/api/%FF")]
#[case("/json/%FF?gross_pay=5000")]
#[tokio::test]
async fn i3_unknown_function_lists_every_function(#[case] path: &str) {
    let client = TestClient::bundled();

    let response = client.get(path).await;

    assert_eq!(response.status_code(), 400);
    let message = assert_error_envelope(&response.body, 400, &BUNDLED_FUNCTIONS);
    assert_eq!(message, UNKNOWN_ENDPOINT);
}

// =============================================================================
// I4: Missing Parameters
// =============================================================================

#[rstest]
#[case("gross_pay=5000&taxes_and_fees=3000")]
#[case("employer_match=1000&taxes_and_fees=3000")]
#[case("gross_pay=5000&employer_match=1000")]
#[case("")]
#[case("GROSS_PAY=5000&employer_match=1000&taxes_and_fees=3000")]
#[tokio::test]
async fn i4_missing_parameter_lists_every_parameter(#[case] query: &str) {
    let client = TestClient::bundled();

    let response = client.get(&format!("/api/take_home_pay?{query}")).await;

    assert_eq!(response.status_code(), 400);
    let message = assert_error_envelope(&response.body, 400, &TAKE_HOME_PAY_PARAMETERS);
    assert_eq!(message, MISSING_PARAMETERS);
}

#[rstest]
#[tokio::test]
async fn i4_declared_default_is_still_required() {
    let client = TestClient::bundled();

    let response = client.get("/api/fi_number?planned_yearly_expenses=40000").await;

    assert_eq!(response.status_code(), 400);
    assert_error_envelope(
        &response.body,
        400,
        &["planned_yearly_expenses", "withdrawal_rate"],
    );
}

// =============================================================================
// I5: Invalid Values
// =============================================================================

#[rstest]
#[case("/api/rule_of_72?interest_rate=eight", "float")]
#[case("/api/redeem_points?points=12.5", "int")]
#[case(
    "/api/take_home_pay?gross_pay=5000&employer_match=0&taxes_and_fees=1,,2",
    "list[float]"
)]
#[tokio::test]
async fn i5_malformed_number_is_client_error(#[case] path: &str, #[case] expected_type: &str) {
    let client = TestClient::bundled();

    let response = client.get(path).await;

    assert_eq!(response.status_code(), 400);
    assert_error_envelope(&response.body, 400, &[expected_type]);
}

#[rstest]
#[tokio::test]
async fn i5_literal_outside_allowed_set_lists_allowed_values() {
    let client = TestClient::bundled();

    let response = client
        .get("/api/compound_growth?principal=1000&annual_rate=10&years=2&frequency=hourly")
        .await;

    assert_eq!(response.status_code(), 400);
    let message = assert_error_envelope(
        &response.body,
        400,
        &["annually", "quarterly", "monthly", "daily"],
    );
    assert_eq!(
        message,
        "Invalid value for GET parameter 'frequency'. Only the following values are allowed"
    );
}

#[rstest]
#[tokio::test]
async fn i5_domain_rejection_names_parameter() {
    let client = TestClient::bundled();

    let response = client.get("/api/rule_of_72?interest_rate=0").await;

    assert_eq!(response.status_code(), 400);
    assert_error_envelope(&response.body, 400, &["interest_rate"]);
}
