//! Error normalization and instrumentation, end to end.

use std::sync::Arc;
use std::time::Duration;

use iptv_relay_client::transport::{API_BASE_PATH, NETWORK_ERROR};
use iptv_relay_client::{ApiError, ErrorBody, RecentErrors, RelayClient, Transport};
use iptv_relay_test_utils::{CannedResponse, MockBackend, unreachable_base_url};
use pretty_assertions::assert_eq;
use serde_json::json;

fn client_for(base_url: String) -> RelayClient {
    RelayClient::new(base_url).unwrap()
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = client_for(unreachable_base_url());

    let err = client.status().get_status().await.unwrap_err();

    assert!(err.is_network(), "got {err:?}");
    assert_eq!(
        err.to_body(),
        ErrorBody {
            message: NETWORK_ERROR.to_string(),
            detail: None,
            status: None,
        }
    );
}

#[tokio::test]
async fn test_unmatched_route_uses_backend_detail() {
    let backend = MockBackend::start().await;
    let client = client_for(backend.base_url());

    let err = client.udpxy().status().await.unwrap_err();

    assert_eq!(err.message(), "Not Found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_message_field_used_without_detail() {
    let backend = MockBackend::start().await;
    backend.on(
        "POST",
        "/api/v1/udpxy/actions",
        CannedResponse::json(500, json!({"message": "udpxy binary missing"})),
    );
    let client = client_for(backend.base_url());

    let err = client.udpxy().start().await.unwrap_err();

    assert_eq!(err.message(), "udpxy binary missing");
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn test_validation_detail_is_kept_raw() {
    let backend = MockBackend::start().await;
    let detail = json!([{"loc": ["body", "mode"], "msg": "field required", "type": "missing"}]);
    backend.on(
        "POST",
        "/api/v1/cron",
        CannedResponse::json(422, json!({"detail": detail.clone()})),
    );
    let client = client_for(backend.base_url());
    let request = iptv_relay_client::types::CronSetupRequest::new(
        iptv_relay_client::types::Schedule::interval(None, None),
    );

    let err = client.cron().install(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.detail(), Some(detail));
}

#[tokio::test]
async fn test_unstructured_error_body() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/api/v1/status",
        CannedResponse::raw(502, "<html><body>Bad Gateway</body></html>"),
    );
    let client = client_for(backend.base_url());

    let err = client.status().get_status().await.unwrap_err();

    assert_eq!(err.message(), "request failed (502)");
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_structured_error_without_text() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/api/v1/logs", CannedResponse::json(500, json!({})));
    let client = client_for(backend.base_url());

    let err = client.logs().recent(None).await.unwrap_err();

    assert_eq!(err.message(), "request failed");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_success_body_of_wrong_shape_is_decode_error() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/api/v1/config", CannedResponse::json(200, json!({"ok": true})));
    let client = client_for(backend.base_url());

    let err = client.config().get().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { status: 200, .. }), "got {err:?}");
    assert!(err.detail().is_some());
}

#[tokio::test]
async fn test_timeout_surfaces_as_network_error() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/api/v1/status",
        CannedResponse::json(200, json!({})).with_delay(Duration::from_secs(5)),
    );
    let transport = Transport::builder(backend.base_url())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = RelayClient::from_transport(transport);

    let err = client.status().get_status().await.unwrap_err();

    assert!(err.is_network(), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[test_log::test(tokio::test)]
async fn test_observer_sees_each_failure_once() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/api/v1/status/interfaces",
        CannedResponse::json(404, json!({"detail": "Interface 'eth9' not found"})),
    );
    let recorder = RecentErrors::new(8);
    let reader = recorder.reader();
    let transport = Transport::builder(backend.base_url())
        .observer(Arc::new(recorder))
        .build()
        .unwrap();
    let client = RelayClient::from_transport(transport);

    let _ = client.status().get_network(Some("eth9")).await;
    let _ = client.udpxy().get_config().await;

    let entries = reader.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].method, "GET");
    assert_eq!(entries[0].path, "/status/interfaces");
    assert_eq!(entries[0].error.message, "Interface 'eth9' not found");
    assert_eq!(entries[1].path, "/udpxy/config");
    assert_eq!(entries[1].error.status, Some(404));
}

#[tokio::test]
async fn test_successful_calls_are_not_reported() {
    let backend = MockBackend::start().await;
    backend.on("POST", "/api/v1/logs/clear", CannedResponse::json(200, json!({"ok": true})));
    let recorder = RecentErrors::new(8);
    let reader = recorder.reader();
    let transport = Transport::builder(backend.base_url())
        .observer(Arc::new(recorder))
        .build()
        .unwrap();

    RelayClient::from_transport(transport).logs().clear().await.unwrap();

    assert!(reader.is_empty());
}

#[tokio::test]
async fn test_requests_carry_json_headers_and_user_agent() {
    let backend = MockBackend::start().await;
    backend.on("POST", "/api/v1/logs/clear", CannedResponse::json(200, json!({"ok": true})));
    let client = client_for(format!("{}/", backend.base_url()));

    client.logs().clear().await.unwrap();

    let req = backend.only_request();
    assert!(req.path.starts_with(API_BASE_PATH));
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert!(
        req.user_agent
            .as_deref()
            .is_some_and(|ua| ua.starts_with("iptv-relay/"))
    );
}
