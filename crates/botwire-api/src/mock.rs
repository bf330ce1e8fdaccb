//! Recording transport for tests.

use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use async_trait::async_trait;
use botwire_core::error::{TransportError, TransportErrorKind};
use futures_util::StreamExt;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// A request as seen by [`MockTransport`], with the multipart body drained.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Last URL path segment, e.g. `sendPhoto`.
    pub api_method: String,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    /// Query parameter value.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Replays queued responses in order and records every request.
///
/// Once the queue is empty every call fails with a non-timeout transport
/// error, which ends a poll loop under test.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with this JSON body.
    pub fn push_json(&self, body: serde_json::Value) {
        self.push_status(200, body.to_string());
    }

    /// Queue a successful envelope around `result`.
    pub fn push_ok(&self, result: serde_json::Value) {
        self.push_json(serde_json::json!({"ok": true, "result": result}));
    }

    pub fn push_status(&self, status: u16, body: impl Into<String>) {
        self.lock_responses().push_back(Ok(HttpResponse {
            status,
            body: body.into().into_bytes(),
        }));
    }

    pub fn push_error(&self, error: TransportError) {
        self.lock_responses().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<HttpResponse, TransportError>>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (content_type, body) = match request.body {
            Some(body) => {
                let content_type = body.content_type();
                let mut bytes = Vec::new();
                let mut stream = body.into_stream();
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk
                        .map_err(|e| TransportError::new(TransportErrorKind::Body, e.to_string()))?;
                    bytes.extend_from_slice(&chunk);
                }
                (Some(content_type), bytes)
            }
            None => (None, Vec::new()),
        };

        let api_method = request
            .url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                method: request.method,
                api_method,
                url: request.url,
                query: request.query,
                content_type,
                body,
                timeout: request.timeout,
            });

        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(TransportError::new(
                TransportErrorKind::Other,
                "mock transport has no queued response",
            ))
        })
    }
}
