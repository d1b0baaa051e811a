//! Status and interface-resolution behaviour against a recording backend.

use iptv_relay_client::types::{InterfaceStatus, NetworkInterfaceDetail};
use iptv_relay_client::{ApiError, InterfaceRef, RelayClient};
use iptv_relay_test_utils::{CannedResponse, MockBackend};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const INTERFACES: &str = "/api/v1/status/interfaces";
const INTERFACES_LIST: &str = "/api/v1/status/interfaces_list";

fn detail_json(name: &str, ip: Option<&str>, gateway: Option<&str>) -> Value {
    json!({"name": name, "ip": ip, "gateway": gateway, "has_ip": ip.is_some()})
}

async fn backend_resolving(interfaces: Vec<Value>) -> (MockBackend, RelayClient) {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        INTERFACES,
        CannedResponse::json(200, json!({"interfaces": interfaces})),
    );
    let client = RelayClient::new(backend.base_url()).unwrap();
    (backend, client)
}

// ── get_status ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_status_decodes_aggregate() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/api/v1/status",
        CannedResponse::json(
            200,
            json!({
                "m3u": {"exists": true, "size": 52311, "mtime": 1760000000, "download_url": "/playlist.m3u"},
                "epg": {"exists": false, "size": 0, "mtime": 0},
                "last_job": "m3u",
                "last_job_rc": 0,
                "last_job_at": 1760000000,
                "udpxy": {
                    "running": true, "pid": 812, "port": 4022,
                    "bind_address": "0.0.0.0", "source_iface": "ens160",
                    "max_connections": 10, "connections": 2, "uptime": 3600,
                    "available": true
                }
            }),
        ),
    );
    let client = RelayClient::new(backend.base_url()).unwrap();

    let status = client.status().get_status().await.unwrap();

    assert!(status.m3u.exists);
    assert_eq!(status.m3u.download_url.as_deref(), Some("/playlist.m3u"));
    assert!(!status.epg.exists);
    assert!(status.last_job_succeeded());
    assert_eq!(status.udpxy.map(|u| u.connections), Some(2));

    let req = backend.only_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/v1/status");
    assert_eq!(req.query, None);
}

// ── get_interface_status ────────────────────────────────────────────────

#[tokio::test]
async fn test_interface_token_forwarded_verbatim() {
    let (backend, client) = backend_resolving(vec![]).await;

    client
        .status()
        .get_interface_status(Some("source_iface,ens192"))
        .await
        .unwrap();

    let req = backend.only_request();
    assert_eq!(req.path, INTERFACES);
    assert_eq!(req.query_param("interfaces"), Some("source_iface,ens192"));
    assert_eq!(req.query_params.len(), 1);
}

#[tokio::test]
async fn test_composed_token_is_forwarded_unparsed() {
    let (backend, client) = backend_resolving(vec![]).await;
    let token = InterfaceRef::join([
        InterfaceRef::local(),
        InterfaceRef::name("ens160"),
        InterfaceRef::local(),
    ]);

    client.status().get_interface_status(Some(&token)).await.unwrap();

    assert_eq!(
        backend.only_request().query_param("interfaces"),
        Some("local_iface,ens160,local_iface")
    );
}

#[tokio::test]
async fn test_absent_token_sends_no_parameter() {
    let (backend, client) = backend_resolving(vec![]).await;

    client.status().get_interface_status(None).await.unwrap();

    let req = backend.only_request();
    assert_eq!(req.path, INTERFACES);
    assert_eq!(req.query, None);
}

#[tokio::test]
async fn test_empty_token_is_still_sent() {
    let (backend, client) = backend_resolving(vec![]).await;

    client.status().get_interface_status(Some("")).await.unwrap();

    let req = backend.only_request();
    assert_eq!(req.query.as_deref(), Some("interfaces="));
    assert_eq!(req.query_param("interfaces"), Some(""));
}

#[tokio::test]
async fn test_resolved_order_and_duplicates_preserved() {
    let (_backend, client) = backend_resolving(vec![
        detail_json("ens192", Some("192.168.1.241"), Some("192.168.1.1")),
        detail_json("ens160", None, None),
        detail_json("ens192", Some("192.168.1.241"), Some("192.168.1.1")),
    ])
    .await;

    let resolved = client
        .status()
        .get_interface_status(Some("local_iface,source_iface,ens192"))
        .await
        .unwrap();

    let names: Vec<_> = resolved.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["ens192", "ens160", "ens192"]);
    assert!(!resolved.interfaces[1].has_ip);
    assert_eq!(resolved.interfaces[1].ip, None);
}

#[tokio::test]
async fn test_physical_attributes_pass_through() {
    let (_backend, client) = backend_resolving(vec![json!({
        "name": "ens192", "ip": "192.168.1.241", "gateway": null, "has_ip": true,
        "status": "up", "mac_address": "00:0c:29:aa:bb:cc", "type": "ethernet",
        "driver": "vmxnet3", "speed": "10000Mb/s", "duplex": "full"
    })])
    .await;

    let resolved = client.status().get_interface_status(None).await.unwrap();

    let iface = &resolved.interfaces[0];
    assert_eq!(iface.status, Some(InterfaceStatus::Up));
    assert_eq!(iface.driver.as_deref(), Some("vmxnet3"));
}

#[tokio::test]
async fn test_unknown_interface_detail_is_surfaced() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        INTERFACES,
        CannedResponse::json(404, json!({"detail": "Interface 'eth9' not found"})),
    );
    let client = RelayClient::new(backend.base_url()).unwrap();

    let err = client
        .status()
        .get_interface_status(Some("eth9"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Interface 'eth9' not found");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some(json!("Interface 'eth9' not found")));
}

// ── get_network ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_network_returns_first_resolved() {
    let (backend, client) = backend_resolving(vec![
        detail_json("ens160", Some("10.0.0.2"), None),
        detail_json("ens192", Some("192.168.1.241"), Some("192.168.1.1")),
    ])
    .await;

    let primary = client
        .status()
        .get_network(Some("source_iface"))
        .await
        .unwrap();

    assert_eq!(primary.name, "ens160");
    assert_eq!(primary.ip.as_deref(), Some("10.0.0.2"));
    assert_eq!(
        backend.only_request().query_param("interfaces"),
        Some("source_iface")
    );
}

#[tokio::test]
async fn test_get_network_empty_resolution_is_placeholder() {
    let (_backend, client) = backend_resolving(vec![]).await;

    let primary = client.status().get_network(None).await.unwrap();

    assert_eq!(primary, NetworkInterfaceDetail::empty());
    assert_eq!(
        serde_json::to_value(&primary).unwrap(),
        json!({"name": "", "ip": null, "gateway": null, "has_ip": false})
    );
}

#[tokio::test]
async fn test_get_network_propagates_failure() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        INTERFACES,
        CannedResponse::json(500, json!({"detail": "ip command failed"})),
    );
    let client = RelayClient::new(backend.base_url()).unwrap();

    let err = client.status().get_network(None).await.unwrap_err();

    assert!(matches!(err, ApiError::Server { status: 500, .. }));
}

// ── get_interfaces ──────────────────────────────────────────────────────

async fn backend_listing() -> (MockBackend, RelayClient) {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        INTERFACES_LIST,
        CannedResponse::json(
            200,
            json!({
                "interfaces": [
                    {"name": "ens160", "status": "up", "ip": "10.0.0.2", "has_ip": true,
                     "pic_id": "0000:03:00.0", "type": "ethernet"},
                    {"name": "docker0", "status": "down", "ip": null, "has_ip": false}
                ],
                "physical_only": false
            }),
        ),
    );
    let client = RelayClient::new(backend.base_url()).unwrap();
    (backend, client)
}

#[tokio::test]
async fn test_get_interfaces_physical_true() {
    let (backend, client) = backend_listing().await;

    client.status().get_interfaces(Some(true)).await.unwrap();

    let req = backend.only_request();
    assert_eq!(req.path, INTERFACES_LIST);
    assert_eq!(req.query.as_deref(), Some("physical=true"));
}

#[tokio::test]
async fn test_get_interfaces_physical_false_is_explicit() {
    let (backend, client) = backend_listing().await;

    client.status().get_interfaces(Some(false)).await.unwrap();

    assert_eq!(backend.only_request().query.as_deref(), Some("physical=false"));
}

#[tokio::test]
async fn test_get_interfaces_absent_filter_sends_nothing() {
    let (backend, client) = backend_listing().await;

    let inventory = client.status().get_interfaces(None).await.unwrap();

    assert_eq!(backend.only_request().query, None);
    assert_eq!(inventory.interfaces.len(), 2);
    assert!(inventory.interfaces[0].is_physical());
    assert!(!inventory.interfaces[1].is_physical());
}

// ── concurrency ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let (backend, client) = backend_resolving(vec![detail_json("ens160", None, None)]).await;

    let handles: Vec<_> = ["source_iface", "local_iface", "ens160"]
        .into_iter()
        .map(|token| {
            let client = client.clone();
            tokio::spawn(async move { client.status().get_network(Some(token)).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().name, "ens160");
    }

    let mut tokens: Vec<_> = backend
        .requests()
        .into_iter()
        .filter_map(|r| r.query_param("interfaces").map(str::to_string))
        .collect();
    tokens.sort();
    assert_eq!(tokens, vec!["ens160", "local_iface", "source_iface"]);
}
