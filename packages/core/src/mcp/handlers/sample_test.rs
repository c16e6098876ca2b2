//! Tests for sample_dataset validation.

use super::*;
use serde_json::json;

fn offline_gateway() -> GatewayClient {
    GatewayClient::new("http://127.0.0.1:1", None)
}

#[tokio::test]
async fn test_sample_size_bounds_enforced() {
    for bad in [0, 101] {
        let result = handle_sample_dataset(
            &offline_gateway(),
            json!({ "dataset_name": "orders", "sample_size": bad }),
        )
        .await;

        assert!(result.failed(), "sample_size {} should be rejected", bad);
        assert!(result
            .first_text()
            .contains("sample_size must be between 1 and 100"));
    }
}

#[tokio::test]
async fn test_stratify_by_is_accepted() {
    // Not supported by the Gateway, but a valid argument; the next failure
    // is the missing credential, not validation
    let result = handle_sample_dataset(
        &offline_gateway(),
        json!({
            "dataset_name": "orders",
            "sample_size": 10,
            "stratify_by": "status"
        }),
    )
    .await;

    assert!(result.failed());
    assert!(result
        .first_text()
        .starts_with("Error sampling dataset: Error: DATASCOPE_API_TOKEN"));
}

#[tokio::test]
async fn test_unknown_argument_rejected() {
    let result = handle_sample_dataset(
        &offline_gateway(),
        json!({ "dataset_name": "orders", "seed": 42 }),
    )
    .await;

    assert!(result.failed());
    assert!(result.first_text().contains("Invalid parameters"));
}
