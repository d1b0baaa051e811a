//! Recording mock of the relay backend.
//!
//! [`MockBackend`] binds an axum server to an ephemeral `127.0.0.1` port.
//! Every request is recorded (method, path, raw query, headers we care
//! about, body) and answered from a table of canned responses keyed by
//! method and path. Unmatched requests get FastAPI's stock
//! `404 {"detail":"Not Found"}`.
//!
//! ```ignore
//! let backend = MockBackend::start().await;
//! backend.on("GET", "/api/v1/status", CannedResponse::json(200, json!({...})));
//! let client = RelayClient::new(backend.base_url())?;
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_TYPE, USER_AGENT};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::debug;

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path exactly as received, e.g. `/api/v1/interfaces/source_iface,ens192`.
    pub path: String,
    /// Raw query string without the leading `?`; `None` when the URL had none.
    pub query: Option<String>,
    /// Decoded query pairs, in order.
    pub query_params: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// First decoded value for `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The body parsed as JSON, or `None` when empty or not JSON.
    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// A reply the mock sends for a matching request.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay: Option<Duration>,
}

impl CannedResponse {
    /// JSON reply.
    pub fn json(status: u16, body: Value) -> Self {
        Self::raw(status, body.to_string())
    }

    /// Reply with the body bytes exactly as given (empty, plain text, HTML…).
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    /// Hold the reply back for `delay` before sending it.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(String, String), CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// An in-process stand-in for the relay backend.
///
/// The server stops when the value is dropped.
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockBackend {
    /// Bind to an ephemeral port and start serving.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend has no address");

        let state = Arc::new(MockState::default());
        let app = axum::Router::new()
            .fallback(handle_any)
            .with_state(Arc::clone(&state));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
        debug!(%addr, "mock backend listening");

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Origin to hand to the client, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register (or replace) the reply for `method` + `path`.
    ///
    /// `path` is the full request path including `/api/v1`; the query
    /// string is not part of the match.
    pub fn on(&self, method: &str, path: &str, response: CannedResponse) -> &Self {
        self.state
            .routes
            .lock()
            .expect("routes lock poisoned")
            .insert((method.to_ascii_uppercase(), path.to_string()), response);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }

    /// The single request received so far. Panics unless exactly one arrived.
    pub fn only_request(&self) -> RecordedRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:#?}");
        requests.remove(0)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle_any(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        query_params: Query::<Vec<(String, String)>>::try_from_uri(&uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default(),
        content_type: header(CONTENT_TYPE),
        user_agent: header(USER_AGENT),
        body: body.to_vec(),
    };
    debug!(method = %recorded.method, path = %recorded.path, "mock backend request");

    let canned = state
        .routes
        .lock()
        .expect("routes lock poisoned")
        .get(&(recorded.method.clone(), recorded.path.clone()))
        .cloned();
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(recorded);

    let Some(canned) = canned else {
        return (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            r#"{"detail":"Not Found"}"#,
        )
            .into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(CONTENT_TYPE, "application/json")], canned.body).into_response()
}

/// An origin nothing is listening on.
///
/// Binds an ephemeral port and releases it immediately, so connecting is
/// refused rather than left hanging.
pub fn unreachable_base_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}
