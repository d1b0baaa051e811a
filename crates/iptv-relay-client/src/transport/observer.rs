//! Instrumentation hook for failed requests.
//!
//! The transport reports every normalized failure to exactly one
//! [`ErrorObserver`]. The default, [`TracingObserver`], emits a `warn!`
//! event. [`RecentErrors`] keeps the last N failures in a bounded ring
//! buffer so a UI can show them without wiring up a subscriber.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::warn;

use super::error::{ApiError, ErrorBody};

/// The request a failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: String,
    /// Path below the API base, e.g. `/status/interfaces`.
    pub path: String,
}

/// Receives every failure the transport normalizes.
///
/// Implementations must be cheap and must not block: they run inline on
/// the request's task.
pub trait ErrorObserver: Send + Sync {
    fn on_error(&self, ctx: &RequestContext, error: &ApiError);
}

/// Default observer: one `tracing` warning per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ErrorObserver for TracingObserver {
    fn on_error(&self, ctx: &RequestContext, error: &ApiError) {
        warn!(
            method = %ctx.method,
            path = %ctx.path,
            status = ?error.status(),
            error = %error,
            "relay API request failed"
        );
    }
}

/// A single recorded failure.
#[derive(Debug, Clone)]
pub struct FailedRequest {
    /// Seconds since the recorder was created.
    pub elapsed_secs: f64,
    pub method: String,
    pub path: String,
    pub error: ErrorBody,
}

#[derive(Debug)]
struct FailureBuffer {
    entries: VecDeque<FailedRequest>,
    capacity: usize,
    start_time: Instant,
}

impl FailureBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            start_time: Instant::now(),
        }
    }

    fn push(&mut self, ctx: &RequestContext, error: ErrorBody) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(FailedRequest {
            elapsed_secs: self.start_time.elapsed().as_secs_f64(),
            method: ctx.method.clone(),
            path: ctx.path.clone(),
            error,
        });
    }
}

/// Observer that records failures into a bounded ring buffer.
///
/// Oldest entries are evicted first. Also forwards to [`TracingObserver`]
/// so failures stay visible in the log.
#[derive(Debug, Clone)]
pub struct RecentErrors {
    buffer: Arc<Mutex<FailureBuffer>>,
}

impl RecentErrors {
    /// Create a recorder holding at most `capacity` failures.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(FailureBuffer::new(capacity))),
        }
    }

    /// Get a reader handle for the recorded failures.
    pub fn reader(&self) -> RecentErrorsReader {
        RecentErrorsReader {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl ErrorObserver for RecentErrors {
    fn on_error(&self, ctx: &RequestContext, error: &ApiError) {
        TracingObserver.on_error(ctx, error);
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(ctx, error.to_body());
        }
    }
}

/// A read handle for [`RecentErrors`].
#[derive(Debug, Clone)]
pub struct RecentErrorsReader {
    buffer: Arc<Mutex<FailureBuffer>>,
}

impl RecentErrorsReader {
    /// Snapshot of the recorded failures, oldest first.
    pub fn entries(&self) -> Vec<FailedRequest> {
        self.buffer
            .lock()
            .map(|buf| buf.entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buf| buf.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every recorded failure.
    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(path: &str) -> RequestContext {
        RequestContext {
            method: "GET".to_string(),
            path: path.to_string(),
        }
    }

    fn network() -> ApiError {
        ApiError::Network {
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_recent_errors_records_failures() {
        let recorder = RecentErrors::new(10);
        let reader = recorder.reader();

        recorder.on_error(&ctx("/status"), &network());

        let entries = reader.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/status");
        assert_eq!(entries[0].error.message, "network error, cannot reach server");
        assert_eq!(entries[0].error.status, None);
    }

    #[test]
    fn test_recent_errors_ring_buffer() {
        let recorder = RecentErrors::new(2);
        let reader = recorder.reader();

        recorder.on_error(&ctx("/one"), &network());
        recorder.on_error(&ctx("/two"), &network());
        recorder.on_error(&ctx("/three"), &network());

        let paths: Vec<_> = reader.entries().into_iter().map(|e| e.path).collect();
        // "/one" should have been evicted
        assert_eq!(paths, vec!["/two", "/three"]);
    }

    #[test]
    fn test_recent_errors_clear() {
        let recorder = RecentErrors::new(4);
        let reader = recorder.reader();
        assert!(reader.is_empty());

        recorder.on_error(&ctx("/udpxy"), &network());
        assert_eq!(reader.len(), 1);

        reader.clear();
        assert!(reader.is_empty());
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let recorder = RecentErrors::new(0);
        recorder.on_error(&ctx("/logs"), &network());
        assert!(recorder.reader().is_empty());
    }
}
