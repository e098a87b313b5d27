//! Mock transport and static source for testing
//!
//! Provides scripted stand-ins for the primary API transport and the static
//! fallback source, with call capture for call-count assertions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::request::{Method, RequestBody, RequestDescriptor};
use super::transport::{RawResponse, Transport};
use crate::error::ApiError;
use crate::source::StaticSource;

/// Scripted reply for one endpoint.
#[derive(Debug, Clone)]
enum Reply {
    Raw { status: u16, body: Vec<u8> },
    TransportError,
}

/// A captured request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Full URL requested
    pub url: String,
    /// Logical method
    pub method: Method,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Body kind: "empty", "json" or "multipart"
    pub body_kind: &'static str,
    /// Multipart file field names, if any
    pub file_fields: Vec<String>,
}

#[derive(Default)]
struct TransportState {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<CapturedRequest>>,
    completed: AtomicUsize,
}

/// Mock transport for testing.
///
/// Replies are matched by endpoint path suffix. Unscripted endpoints answer
/// 404. Clones share state, so a test can keep a handle after moving one
/// into a loader.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().respond_json("/api/team/", json!([]));
/// let handle = mock.clone();
/// // ... hand `mock` to a Dispatcher ...
/// assert_eq!(handle.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<TransportState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(self, endpoint: &str, reply: Reply) -> Self {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), reply);
        self
    }

    /// Answer `endpoint` with 200 and a JSON body.
    pub fn respond_json(self, endpoint: &str, body: Value) -> Self {
        let bytes = serde_json::to_vec(&body).unwrap();
        self.script(
            endpoint,
            Reply::Raw {
                status: 200,
                body: bytes,
            },
        )
    }

    /// Answer `endpoint` with the given status and an empty JSON object.
    pub fn respond_status(self, endpoint: &str, status: u16) -> Self {
        self.script(
            endpoint,
            Reply::Raw {
                status,
                body: b"{}".to_vec(),
            },
        )
    }

    /// Answer `endpoint` with a raw status and body.
    pub fn respond_raw(self, endpoint: &str, status: u16, body: &[u8]) -> Self {
        self.script(
            endpoint,
            Reply::Raw {
                status,
                body: body.to_vec(),
            },
        )
    }

    /// Fail `endpoint` at the transport level (connection refused).
    pub fn fail_transport(self, endpoint: &str) -> Self {
        self.script(endpoint, Reply::TransportError)
    }

    /// Hold the reply for `endpoint` for `delay` before answering.
    pub fn delay(self, endpoint: &str, delay: Duration) -> Self {
        self.state
            .delays
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), delay);
        self
    }

    /// All captured requests, in arrival order.
    pub fn calls(&self) -> Vec<CapturedRequest> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Total number of requests received.
    pub fn call_count(&self) -> usize {
        self.state.calls.lock().unwrap().len()
    }

    /// Number of requests whose URL ends with `endpoint`.
    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.state
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.url.ends_with(endpoint))
            .count()
    }

    /// Number of requests that ran to completion (were not cancelled).
    pub fn completed(&self) -> usize {
        self.state.completed.load(Ordering::SeqCst)
    }

    fn lookup<T: Clone>(map: &Mutex<HashMap<String, T>>, url: &str) -> Option<T> {
        map.lock()
            .unwrap()
            .iter()
            .find(|(endpoint, _)| url.ends_with(endpoint.as_str()))
            .map(|(_, v)| v.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, url: &str, request: &RequestDescriptor) -> Result<RawResponse, ApiError> {
        let (body_kind, file_fields) = match &request.body {
            RequestBody::Empty => ("empty", vec![]),
            RequestBody::Json(_) => ("json", vec![]),
            RequestBody::Multipart(form) => (
                "multipart",
                form.files.iter().map(|f| f.field.clone()).collect(),
            ),
        };
        self.state.calls.lock().unwrap().push(CapturedRequest {
            url: url.to_string(),
            method: request.method,
            query: request.query.clone(),
            body_kind,
            file_fields,
        });

        if let Some(delay) = Self::lookup(&self.state.delays, url) {
            tokio::time::sleep(delay).await;
        }
        self.state.completed.fetch_add(1, Ordering::SeqCst);

        match Self::lookup(&self.state.replies, url) {
            Some(Reply::Raw { status, body }) => Ok(RawResponse {
                status,
                status_text: reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or_default()
                    .to_string(),
                body,
            }),
            Some(Reply::TransportError) => {
                Err(ApiError::Transport("Connection refused".to_string()))
            }
            None => Ok(RawResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                body: b"{}".to_vec(),
            }),
        }
    }
}

#[derive(Default)]
struct StaticState {
    documents: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
}

/// Mock static fallback source.
///
/// Documents not registered fail with a transport error, like a missing file.
#[derive(Clone, Default)]
pub struct MockStaticSource {
    state: Arc<StaticState>,
}

impl MockStaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` (e.g. `api/team.json`) with `body`.
    pub fn with_document(self, document: &str, body: Value) -> Self {
        self.state
            .documents
            .lock()
            .unwrap()
            .insert(document.to_string(), body);
        self
    }

    /// All documents requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Number of fetches of `document`.
    pub fn calls_to(&self, document: &str) -> usize {
        self.state
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.as_str() == document)
            .count()
    }
}

#[async_trait]
impl StaticSource for MockStaticSource {
    async fn fetch(&self, document: &str) -> Result<Value, ApiError> {
        self.state.calls.lock().unwrap().push(document.to_string());
        self.state
            .documents
            .lock()
            .unwrap()
            .get(document)
            .cloned()
            .ok_or_else(|| ApiError::Transport(format!("{} not found", document)))
    }

    fn asset_base(&self) -> String {
        "https://static.test".to_string()
    }

    fn describe(&self) -> String {
        "mock static source".to_string()
    }
}
