//! Pull-mode delivery and webhook mode switching.


use crate::dispatcher::Dispatcher;
use botwire_api::client::{BotClient, GetUpdates, SetWebhook};
use botwire_core::{
    config::{PollingConfig, UnknownMessagePolicy},
    error::BotError,
    traits::UpdateHandler,
    types::{PhotoSize, Update},
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const HANDSHAKE_INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const HANDSHAKE_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// A bot: an API client plus the dispatcher its updates are fed to.
///
/// Delivery is either pull ([`poll`](Self::poll)) or push
/// ([`listen`](Self::listen) plus the [webhook receiver](crate::webhook)),
/// never both: polling starts by deleting any registered webhook.
pub struct Bot<H> {
    client: BotClient,
    dispatcher: Dispatcher<H>,
    delete_webhook_attempts: u32,
}

impl<H: UpdateHandler> Bot<H> {
    pub fn new(client: BotClient, handler: H) -> Self {
        let defaults = PollingConfig::default();
        Self {
            client,
            dispatcher: Dispatcher::new(handler).with_unknown_messages(defaults.unknown_messages),
            delete_webhook_attempts: defaults.delete_webhook_attempts,
        }
    }

    /// Apply the `[polling]` settings.
    pub fn with_polling_config(mut self, config: &PollingConfig) -> Self {
        self.dispatcher = self
            .dispatcher
            .with_unknown_messages(config.unknown_messages);
        self.delete_webhook_attempts = config.delete_webhook_attempts.max(1);
        self
    }

    pub fn unknown_messages(mut self, policy: UnknownMessagePolicy) -> Self {
        self.dispatcher = self.dispatcher.with_unknown_messages(policy);
        self
    }

    pub fn client(&self) -> &BotClient {
        &self.client
    }

    pub fn dispatcher(&self) -> &Dispatcher<H> {
        &self.dispatcher
    }

    /// Fetch and dispatch updates until a non-timeout failure occurs.
    ///
    /// `timeout` is the server-side long-poll timeout in seconds. Updates are
    /// dispatched one at a time in batch order; the next fetch starts only
    /// after the whole batch is handled. Each update is decoded on its own and
    /// the cursor moves past it first, so an update that fails to decode or
    /// dispatch is never fetched again. The cursor lives for this call only.
    pub async fn poll(&self, timeout: u64) -> Result<(), BotError> {
        self.ensure_webhook_deleted().await?;
        info!("polling for updates (long-poll timeout {timeout}s)");

        let mut offset: i64 = 0;
        loop {
            let request = GetUpdates {
                offset: Some(offset),
                timeout: Some(timeout),
                ..Default::default()
            };
            let updates = match self.client.get_updates_raw(&request).await {
                Ok(updates) => updates,
                Err(e) if e.is_timeout() => {
                    debug!("getUpdates timed out, retrying at offset {offset}: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            for value in updates {
                match value.get("update_id").and_then(Value::as_i64) {
                    Some(update_id) => {
                        offset = update_id + 1;
                        debug!("update {update_id}");
                    }
                    None => warn!("update without update_id, cursor stays at {offset}"),
                }
                self.dispatcher.dispatch_value(&value).await?;
            }
        }
    }

    /// Delete the webhook, retrying timeouts and `false` answers with
    /// exponential backoff.
    async fn ensure_webhook_deleted(&self) -> Result<(), BotError> {
        let mut backoff = HANDSHAKE_INITIAL_BACKOFF;
        for attempt in 1..=self.delete_webhook_attempts {
            match self.client.delete_webhook().await {
                Ok(true) => {
                    debug!("webhook deleted (attempt {attempt})");
                    return Ok(());
                }
                Ok(false) => warn!("deleteWebhook returned false (attempt {attempt})"),
                Err(e) if e.is_timeout() => {
                    warn!("deleteWebhook timed out (attempt {attempt}): {e}");
                }
                Err(e) => return Err(e),
            }
            if attempt < self.delete_webhook_attempts {
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(HANDSHAKE_MAX_BACKOFF);
            }
        }
        Err(BotError::Webhook(format!(
            "could not delete webhook after {} attempts",
            self.delete_webhook_attempts
        )))
    }

    /// Fetch every pending update without dispatching.
    ///
    /// Pages are fetched from offset 0, advancing past the last received id,
    /// until a fetch comes back empty. Fetched updates are confirmed on the
    /// server and will not be delivered again.
    pub async fn drain_updates(&self, timeout: Option<u64>) -> Result<Vec<Update>, BotError> {
        let mut all = Vec::new();
        let mut offset = 0;
        loop {
            let request = GetUpdates {
                offset: Some(offset),
                timeout,
                ..Default::default()
            };
            let page = self.client.get_updates(&request).await?;
            let Some(last) = page.last() else {
                break;
            };
            offset = last.update_id + 1;
            all.extend(page);
        }
        debug!("drained {} updates", all.len());
        Ok(all)
    }

    /// Every profile photo of a user, across all pages.
    pub async fn all_user_profile_photos(
        &self,
        user_id: i64,
    ) -> Result<Vec<Vec<PhotoSize>>, BotError> {
        let mut all = Vec::new();
        loop {
            let page = self
                .client
                .get_user_profile_photos(user_id, Some(all.len() as i64), None)
                .await?;
            if page.photos.is_empty() {
                break;
            }
            all.extend(page.photos);
        }
        Ok(all)
    }

    /// Register `url` for push delivery.
    ///
    /// Returns right away; updates then arrive at the webhook receiver.
    pub async fn listen(&self, url: &str) -> Result<bool, BotError> {
        self.listen_with(url, &SetWebhook::default()).await
    }

    pub async fn listen_with(&self, url: &str, opts: &SetWebhook) -> Result<bool, BotError> {
        info!("registering webhook");
        self.client.set_webhook(url, opts).await
    }

    /// Deregister the webhook. Does not stop a running [`poll`](Self::poll).
    pub async fn close(&self) -> Result<bool, BotError> {
        info!("deleting webhook");
        self.client.delete_webhook().await
    }
}
