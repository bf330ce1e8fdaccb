//! HTTP transport seam.
//!
//! The client only needs "send this request, give me status and body".
//! [`ReqwestTransport`] is the production implementation; tests plug in a
//! recording mock.

use crate::multipart::MultipartBody;
use async_trait::async_trait;
use botwire_core::error::{TransportError, TransportErrorKind};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outbound API request.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Query parameters (GET only).
    pub query: Vec<(String, String)>,
    /// Multipart body (POST only).
    pub body: Option<MultipartBody>,
    /// Per-request timeout. `None` means no limit.
    pub timeout: Option<Duration>,
}

/// Raw response: status code and body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url).query(&request.query),
            Method::Post => self.client.post(&request.url),
        };

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, body.content_type())
                .header(CONTENT_LENGTH, body.content_length())
                .body(reqwest::Body::wrap_stream(body.into_stream()));
        }

        let resp = builder.send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(classify)?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Map a reqwest failure onto the transport taxonomy.
///
/// The URL is stripped from the message: it embeds the bot token.
fn classify(e: reqwest::Error) -> TransportError {
    let kind = if e.is_timeout() {
        TransportErrorKind::Timeout
    } else if e.is_connect() {
        TransportErrorKind::Connect
    } else if e.is_body() || e.is_decode() {
        TransportErrorKind::Body
    } else if let Some(status) = e.status() {
        TransportErrorKind::Status(status.as_u16())
    } else {
        TransportErrorKind::Other
    };
    TransportError::new(kind, e.without_url().to_string())
}
