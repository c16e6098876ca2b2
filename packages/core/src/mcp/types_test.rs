//! Tests for JSON-RPC type serialization.

use super::*;
use serde_json::json;

#[test]
fn test_request_with_all_fields() {
    let request: RpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/list",
        "params": {}
    }))
    .unwrap();

    assert_eq!(request.id, json!(7));
    assert_eq!(request.method.as_deref(), Some("tools/list"));
}

#[test]
fn test_request_tolerates_missing_fields() {
    let request: RpcRequest = serde_json::from_value(json!({})).unwrap();

    assert_eq!(request.id, Value::Null);
    assert!(request.method.is_none());
    assert_eq!(request.params, Value::Null);
}

#[test]
fn test_request_accepts_string_ids() {
    let request: RpcRequest =
        serde_json::from_value(json!({ "id": "req-1", "method": "initialize" })).unwrap();
    assert_eq!(request.id, json!("req-1"));
}

#[test]
fn test_success_response_omits_error() {
    let response = RpcResponse::success(json!(1), json!({ "ok": true }));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["jsonrpc"], "2.0");
    assert_eq!(value["id"], 1);
    assert_eq!(value["result"]["ok"], true);
    assert!(value.get("error").is_none());
}

#[test]
fn test_error_response_omits_result() {
    let response = RpcResponse::error(json!(2), RpcError::invalid_request("Invalid Request"));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["error"]["code"], INVALID_REQUEST);
    assert_eq!(value["error"]["message"], "Invalid Request");
    assert!(value.get("result").is_none());
}

#[test]
fn test_error_codes() {
    assert_eq!(RpcError::parse_error("x").code, -32700);
    assert_eq!(RpcError::invalid_request("x").code, -32600);
    assert_eq!(RpcError::dispatch_failed("x").code, -32601);
    assert_eq!(RpcError::internal_error("x").code, -32603);
}
