//! HTTP transport against a mock node: request envelope, status and body handling.

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xrpl_rpc::{HttpTransport, RpcError, Transport, TransportError, XrplClient};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn node_answering(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn posts_method_and_single_params_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "method": "ledger",
            "params": [{"ledger_index": "validated"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"ledger_index": 7, "status": "success"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let result = transport
        .invoke("ledger", json!({"ledger_index": "validated"}))
        .await
        .expect("result");
    assert_eq!(result, json!({"ledger_index": 7, "status": "success"}));
}

#[tokio::test]
async fn node_error_result_is_returned_as_is() {
    let body = json!({"result": {"status": "error", "error": "actNotFound", "error_code": 19}});
    let server = node_answering(ResponseTemplate::new(200).set_body_json(body)).await;

    let result = HttpTransport::new(server.uri())
        .invoke("account_info", json!({}))
        .await
        .expect("result");
    assert_eq!(result["error"], "actNotFound");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_status_is_transient() {
    let server = node_answering(ResponseTemplate::new(503)).await;

    let error = HttpTransport::new(server.uri())
        .invoke("fee", json!({}))
        .await
        .unwrap_err();
    assert_eq!(error, TransportError::Status(503));
    assert!(error.is_transient());
}

#[tokio::test]
async fn client_error_status_is_not_transient() {
    let server = node_answering(ResponseTemplate::new(403)).await;

    let error = HttpTransport::new(server.uri())
        .invoke("fee", json!({}))
        .await
        .unwrap_err();
    assert_eq!(error, TransportError::Status(403));
    assert!(!error.is_transient());
}

#[tokio::test]
async fn body_without_result_object_is_malformed() {
    let server =
        node_answering(ResponseTemplate::new(200).set_body_json(json!({"id": 1}))).await;
    let error = HttpTransport::new(server.uri())
        .invoke("fee", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(error, TransportError::Malformed(_)));

    let server =
        node_answering(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"}))).await;
    let error = HttpTransport::new(server.uri())
        .invoke("fee", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(error, TransportError::Malformed(_)));

    let server = node_answering(ResponseTemplate::new(200).set_body_string("not json")).await;
    let error = HttpTransport::new(server.uri())
        .invoke("fee", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(error, TransportError::Malformed(_)));
    assert!(!error.is_transient());
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let address = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr")
    };
    let transport = HttpTransport::with_timeouts(
        format!("http://{address}/"),
        Duration::from_secs(2),
        Duration::from_secs(1),
    )
    .expect("client");

    let error = transport.invoke("fee", json!({})).await.unwrap_err();
    assert!(matches!(error, TransportError::Unreachable(_)));
    assert!(error.is_transient());
}

// ---------------------------------------------------------------------------
// Through the client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn client_decodes_fee_over_http() {
    let body = json!({
        "result": {
            "current_ledger_size": "14",
            "current_queue_size": "0",
            "drops": {
                "base_fee": "10",
                "median_fee": "11000",
                "minimum_fee": "10",
                "open_ledger_fee": "10"
            },
            "expected_ledger_size": "24",
            "ledger_current_index": 26575101,
            "levels": {
                "median_level": "281600",
                "minimum_level": "256",
                "open_ledger_level": "256",
                "reference_level": "256"
            },
            "max_queue_size": "480",
            "status": "success"
        }
    });
    let server = node_answering(ResponseTemplate::new(200).set_body_json(body)).await;

    let client = XrplClient::new(HttpTransport::new(server.uri()));
    let fee = client.fee().await.expect("fee");
    assert_eq!(fee.drops.open_ledger_fee.drops(), 10);
    assert_eq!(fee.drops.median_fee.drops(), 11_000);

    let server = node_answering(ResponseTemplate::new(502)).await;
    let client = XrplClient::new(HttpTransport::new(server.uri()));
    let error = client.fee().await.unwrap_err();
    assert!(matches!(error, RpcError::Transport(TransportError::Status(502))));
    assert!(error.is_transient());
}
