//! Bot token newtype.

use crate::error::BotError;
use std::fmt;

/// Opaque credential identifying the bot session with the platform.
///
/// Guaranteed non-empty. `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Validate and wrap a raw token string.
    pub fn new(raw: impl Into<String>) -> Result<Self, BotError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BotError::Construction("invalid API token".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw secret, for building request URLs only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

impl fmt::Display for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
