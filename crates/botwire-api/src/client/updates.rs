//! Updates, webhook management, and bot identity.

use super::{BotClient, GetUpdates, SetWebhook, LONG_POLL_GRACE};
use crate::params::Params;
use botwire_core::{
    error::BotError,
    types::{Update, User, WebhookInfo},
};
use serde_json::Value;
use std::time::Duration;

impl BotClient {
    /// Fetch pending updates.
    ///
    /// With a long-poll `timeout`, the HTTP request is allowed that long plus
    /// [`LONG_POLL_GRACE`] before the transport gives up. One undecodable
    /// update fails the whole call; see [`get_updates_raw`](Self::get_updates_raw).
    pub async fn get_updates(&self, opts: &GetUpdates) -> Result<Vec<Update>, BotError> {
        let (params, http_timeout) = update_params(opts, self.request_timeout)?;
        self.get("getUpdates", params, http_timeout).await
    }

    /// Fetch pending updates without decoding them, so each one can be
    /// decoded (and rejected) on its own.
    pub async fn get_updates_raw(&self, opts: &GetUpdates) -> Result<Vec<Value>, BotError> {
        let (params, http_timeout) = update_params(opts, self.request_timeout)?;
        self.get("getUpdates", params, http_timeout).await
    }

    /// Register `url` for push delivery. An empty URL removes the webhook.
    pub async fn set_webhook(&self, url: &str, opts: &SetWebhook) -> Result<bool, BotError> {
        let params = Params::new()
            .with("url", url)
            .with_opt("certificate", opts.certificate.clone())
            .with_opt("max_connections", opts.max_connections)
            .with_json_opt("allowed_updates", opts.allowed_updates.as_ref())?;
        self.call("setWebhook", params).await
    }

    pub async fn delete_webhook(&self) -> Result<bool, BotError> {
        self.call("deleteWebhook", Params::new()).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, BotError> {
        self.call("getWebhookInfo", Params::new()).await
    }

    pub async fn get_me(&self) -> Result<User, BotError> {
        self.call("getMe", Params::new()).await
    }
}

fn update_params(
    opts: &GetUpdates,
    request_timeout: Option<Duration>,
) -> Result<(Params, Option<Duration>), BotError> {
    let params = Params::new()
        .with_opt("offset", opts.offset)
        .with_opt("limit", opts.limit)
        .with_opt("timeout", opts.timeout)
        .with_json_opt("allowed_updates", opts.allowed_updates.as_ref())?;

    let http_timeout = match opts.timeout {
        Some(secs) => Some(Duration::from_secs(secs) + LONG_POLL_GRACE),
        None => request_timeout,
    };
    Ok((params, http_timeout))
}
