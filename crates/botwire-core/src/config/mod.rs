mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BotError;
use crate::token::BotToken;
use defaults::*;

/// Top-level botwire configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// Bot identity and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot token. Overridden by `--token` / `BOTWIRE_TOKEN`.
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Per-request timeout for ordinary calls. Long polls and uploads set their own.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Append logs to this file as well as stderr. Empty = stderr only.
    #[serde(default)]
    pub log_file: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_host: default_api_host(),
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

/// What the poll loop does with a message of no known category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownMessagePolicy {
    /// Propagate the classification error and end polling.
    #[default]
    Stop,
    /// Log a warning and continue with the next update.
    Skip,
}

/// Long-polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Server-side long-poll timeout sent with `getUpdates`.
    #[serde(default = "default_poll_timeout")]
    pub timeout_secs: u64,
    /// How many times `deleteWebhook` is attempted before polling gives up.
    #[serde(default = "default_delete_webhook_attempts")]
    pub delete_webhook_attempts: u32,
    /// Also applied by the webhook receiver.
    #[serde(default)]
    pub unknown_messages: UnknownMessagePolicy,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_poll_timeout(),
            delete_webhook_attempts: default_delete_webhook_attempts(),
            unknown_messages: UnknownMessagePolicy::default(),
        }
    }
}

/// Webhook receiver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Public URL registered with `setWebhook`.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_webhook_host")]
    pub host: String,
    #[serde(default = "default_webhook_port")]
    pub port: u16,
    #[serde(default = "default_webhook_path")]
    pub path: String,
    #[serde(default)]
    pub max_connections: Option<u32>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: default_webhook_host(),
            port: default_webhook_port(),
            path: default_webhook_path(),
            max_connections: None,
        }
    }
}

impl Config {
    /// Resolve the bot token. An explicit override (CLI flag or environment)
    /// wins over the config file.
    pub fn token(&self, override_token: Option<&str>) -> Result<BotToken, BotError> {
        match override_token {
            Some(t) if !t.trim().is_empty() => BotToken::new(t),
            _ => BotToken::new(self.bot.token.as_str()),
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, BotError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| BotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
