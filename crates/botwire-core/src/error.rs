use thiserror::Error;

/// Top-level error type for botwire.
#[derive(Debug, Error)]
pub enum BotError {
    /// The client could not be constructed (e.g. empty token).
    #[error("construction error: {0}")]
    Construction(String),

    /// The HTTP transport failed before a response envelope could be read.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The platform answered with `ok: false`.
    #[error("api error: {description}")]
    Api {
        description: String,
        error_code: Option<i64>,
    },

    /// A message matched none of the known content categories.
    #[error("unknown message type")]
    UnknownMessageType,

    /// The webhook could not be switched off before polling.
    #[error("webhook error: {0}")]
    Webhook(String),

    /// Error raised by user handler code.
    #[error("handler error: {0}")]
    Handler(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BotError {
    /// Build an API error from an envelope description.
    pub fn api(description: impl Into<String>, error_code: Option<i64>) -> Self {
        Self::Api {
            description: description.into(),
            error_code,
        }
    }

    /// Whether this is a timeout-class transport failure (safe to retry).
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Classification of transport-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request did not complete within the configured time.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// Non-2xx status without a decodable envelope.
    Status(u16),
    /// The request or response body could not be streamed.
    Body,
    Other,
}

/// A failure reported by the HTTP transport.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classification() {
        let err = BotError::from(TransportError::timeout("deadline elapsed"));
        assert!(err.is_timeout());

        let err = BotError::from(TransportError::new(TransportErrorKind::Status(502), "bad gateway"));
        assert!(!err.is_timeout());

        assert!(!BotError::api("Bad Request", Some(400)).is_timeout());
    }

    #[test]
    fn test_api_error_display_uses_description() {
        let err = BotError::api("Bad Request: chat not found", Some(400));
        assert_eq!(err.to_string(), "api error: Bad Request: chat not found");
    }
}
