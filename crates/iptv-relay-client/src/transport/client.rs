//! HTTP transport: the single point of dispatch for every resource client.
//!
//! Wraps a pooled `reqwest::Client` with the fixed `/api/v1` base path, a
//! 30 s default timeout and JSON headers. Successful bodies are decoded
//! straight into the caller's domain type; failures are normalized by
//! [`normalize_error_response`] and reported to the shared
//! [`ErrorObserver`] before being returned.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{ApiError, normalize_error_response};
use super::observer::{ErrorObserver, RequestContext, TracingObserver};

/// Base path every endpoint lives under.
pub const API_BASE_PATH: &str = "/api/v1";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Builder for a [`Transport`].
pub struct TransportBuilder {
    base_url: String,
    timeout: Duration,
    observer: Arc<dyn ErrorObserver>,
}

impl TransportBuilder {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Override the request timeout. Expiry surfaces as a network error.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Install the instrumentation hook failures are reported through.
    pub fn observer(mut self, observer: Arc<dyn ErrorObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the transport.
    ///
    /// The base URL is not validated here; a malformed one makes every
    /// request fail with [`ApiError::Request`].
    pub fn build(self) -> Result<Transport, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(crate::build_info::user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Request {
                reason: e.to_string(),
            })?;

        let api_root = format!("{}{API_BASE_PATH}", self.base_url.trim_end_matches('/'));
        debug!(%api_root, timeout_ms = self.timeout.as_millis() as u64, "relay transport ready");

        Ok(Transport {
            client,
            api_root,
            observer: self.observer,
        })
    }
}

/// Shared HTTP transport. Cloning is cheap; clones share the connection pool
/// and the observer.
#[derive(Clone)]
pub struct Transport {
    client: reqwest::Client,
    api_root: String,
    observer: Arc<dyn ErrorObserver>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("api_root", &self.api_root)
            .finish_non_exhaustive()
    }
}

impl Transport {
    /// Start building a transport for the server at `base_url`
    /// (scheme, host and port; `/api/v1` is appended).
    pub fn builder(base_url: impl Into<String>) -> TransportBuilder {
        TransportBuilder::new(base_url.into())
    }

    /// Full URL prefix requests are issued against.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.client.get(self.url(path));
        self.execute(Method::GET, path, builder).await
    }

    /// GET with query parameters. `None` fields of `query` must be skipped
    /// by its `Serialize` impl so they never reach the URL.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.client.get(self.url(path)).query(query);
        self.execute(Method::GET, path, builder).await
    }

    /// POST with no request body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.client.post(self.url(path));
        self.execute(Method::POST, path, builder).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.client.post(self.url(path)).json(body);
        self.execute(Method::POST, path, builder).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.client.put(self.url(path)).json(body);
        self.execute(Method::PUT, path, builder).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.client.delete(self.url(path));
        self.execute(Method::DELETE, path, builder).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let result = self.dispatch(path, builder).await;
        if let Err(ref err) = result {
            let ctx = RequestContext {
                method: method.to_string(),
                path: path.to_string(),
            };
            self.observer.on_error(&ctx, err);
        }
        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = builder.build().map_err(|e| ApiError::Request {
            reason: e.to_string(),
        })?;

        debug!(method = %request.method(), url = %request.url(), "relay API request");

        let resp = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| ApiError::Network {
            reason: format!("failed to read response body: {e}"),
        })?;

        debug!(status = status.as_u16(), path, bytes = body.len(), "relay API response");

        if !status.is_success() {
            return Err(normalize_error_response(status.as_u16(), &body));
        }

        // An empty success body decodes as `null`, so `()` and `Option<_>` work.
        let payload: &[u8] = if body.is_empty() { b"null" } else { &body };
        serde_json::from_slice(payload).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            status: status.as_u16(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root_appends_base_path() {
        let transport = Transport::builder("http://192.168.1.241:8088").build().unwrap();
        assert_eq!(transport.api_root(), "http://192.168.1.241:8088/api/v1");
    }

    #[test]
    fn test_api_root_trims_trailing_slash() {
        let transport = Transport::builder("http://relay.local:8088/").build().unwrap();
        assert_eq!(transport.api_root(), "http://relay.local:8088/api/v1");
    }

    #[test]
    fn test_url_is_concatenated_verbatim() {
        let transport = Transport::builder("http://relay.local").build().unwrap();
        assert_eq!(
            transport.url("/interfaces/source_iface,ens192"),
            "http://relay.local/api/v1/interfaces/source_iface,ens192"
        );
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_a_request_error() {
        let transport = Transport::builder("not a url").build().unwrap();
        let result: Result<serde_json::Value, _> = transport.get("/status").await;
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Request { .. }), "got {err:?}");
        assert_eq!(err.status(), None);
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_debug_hides_client_internals() {
        let transport = Transport::builder("http://relay.local").build().unwrap();
        let debug = format!("{transport:?}");
        assert!(debug.contains("http://relay.local/api/v1"));
    }
}
