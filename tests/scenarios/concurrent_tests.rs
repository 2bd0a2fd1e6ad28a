//! Concurrent requests against one shared router.

use std::sync::Arc;

use serde_json::json;

use crate::helpers::TestClient;

#[tokio::test]
async fn concurrent_mixed_requests_are_independent() {
    let client = TestClient::bundled();

    let (listing, invoked, missing, help) = tokio::join!(
        client.get("/api/"),
        client.get("/api/rule_of_72?interest_rate=8"),
        client.get("/api/rule_of_72"),
        client.get("/json/h/rule_of_72"),
    );

    assert_eq!(listing.status_code(), 200);
    assert_eq!(invoked.body, json!("9"));
    assert_eq!(missing.status_code(), 400);
    assert_eq!(help.status_code(), 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_invocations_see_their_own_arguments() {
    let client = Arc::new(TestClient::bundled());

    let handles: Vec<_> = (1..=32u32)
        .map(|rate| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let response = client
                    .get(&format!("/api/rule_of_72?interest_rate={rate}&round=4"))
                    .await;
                (rate, response.status_code(), response.body)
            })
        })
        .collect();

    for handle in handles {
        let (rate, status, body) = handle.await.expect("request task panicked");
        let expected = function_api::formatting::round_half_up(
            rust_decimal::Decimal::from(72) / rust_decimal::Decimal::from(rate),
            4,
        );
        assert_eq!(status, 200);
        assert_eq!(body, json!(expected.to_string()), "rate {rate}");
    }
}
