//! Bot API client.
//!
//! One async method per remote operation. Requests go to
//! `https://<host>/bot<token>/<method>`; the JSON envelope is unwrapped here
//! so every operation reports platform rejections the same way.

mod chat;
mod edit;
mod files;
mod games;
mod inline;
mod options;
mod send;
mod stickers;
mod updates;


pub use options::*;

use crate::multipart::MultipartBody;
use crate::params::Params;
use crate::transport::{HttpRequest, Method, ReqwestTransport, Transport};
use botwire_core::{
    config::Config,
    error::{BotError, TransportError, TransportErrorKind},
    token::BotToken,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_HOST: &str = "api.telegram.org";

/// Extra time granted to the HTTP request on top of a long-poll timeout.
pub const LONG_POLL_GRACE: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i64>,
}

/// Typed client for the bot platform API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct BotClient {
    token: BotToken,
    base_url: String,
    transport: Arc<dyn Transport>,
    request_timeout: Option<Duration>,
}

impl std::fmt::Debug for BotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotClient")
            .field("token", &self.token)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl BotClient {
    /// Create a client with the default host and a reqwest transport.
    ///
    /// Fails if the token is empty.
    pub fn new(token: &str) -> Result<Self, BotError> {
        Self::with_transport(token, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client on top of an arbitrary transport.
    pub fn with_transport(token: &str, transport: Arc<dyn Transport>) -> Result<Self, BotError> {
        let token = BotToken::new(token)?;
        Ok(Self {
            base_url: base_url(DEFAULT_API_HOST, &token),
            token,
            transport,
            request_timeout: Some(Duration::from_secs(60)),
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config, token_override: Option<&str>) -> Result<Self, BotError> {
        let token = config.token(token_override)?;
        let client = Self::with_transport(token.expose(), Arc::new(ReqwestTransport::new()))?
            .api_host(&config.bot.api_host)
            .request_timeout(Some(Duration::from_secs(config.bot.request_timeout_secs)));
        Ok(client)
    }

    /// Point the client at another API host.
    pub fn api_host(mut self, host: &str) -> Self {
        self.base_url = base_url(host, &self.token);
        self
    }

    /// Timeout for ordinary GET calls. Long polls and uploads set their own.
    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    /// Send with GET, or with multipart POST when any parameter is a file.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<T, BotError> {
        if params.has_file() {
            self.post(method, params).await
        } else {
            self.get(method, params, self.request_timeout).await
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
        timeout: Option<Duration>,
    ) -> Result<T, BotError> {
        debug!("api {method}: GET with {} params", params.len());
        let request = HttpRequest {
            method: Method::Get,
            url: self.method_url(method),
            query: params.query_pairs(),
            body: None,
            timeout,
        };
        self.execute(method, request).await
    }

    /// Multipart POST. No request timeout: uploads may be arbitrarily large.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<T, BotError> {
        let body = MultipartBody::new(params);
        debug!("api {method}: POST multipart, {} bytes", body.content_length());
        let request = HttpRequest {
            method: Method::Post,
            url: self.method_url(method),
            query: Vec::new(),
            body: Some(body),
            timeout: None,
        };
        self.execute(method, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        request: HttpRequest,
    ) -> Result<T, BotError> {
        let resp = self.transport.send(request).await?;

        let envelope: ApiResponse<T> = match serde_json::from_slice(&resp.body) {
            Ok(e) => e,
            Err(e) if resp.is_success() => return Err(BotError::Serialization(e)),
            Err(_) => {
                return Err(TransportError::new(
                    TransportErrorKind::Status(resp.status),
                    format!("{method} failed with HTTP {}", resp.status),
                )
                .into());
            }
        };

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| format!("{method} failed without description"));
            debug!("api {method}: rejected: {description}");
            return Err(BotError::api(description, envelope.error_code));
        }

        envelope
            .result
            .ok_or_else(|| BotError::Serialization(serde::de::Error::missing_field("result")))
    }
}

fn base_url(host: &str, token: &BotToken) -> String {
    format!("https://{host}/bot{}", token.expose())
}
