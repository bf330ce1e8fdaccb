use super::inline::{CallbackQuery, ChosenInlineResult, InlineQuery};
use super::message::Message;
use serde::{Deserialize, Serialize};

/// One notification from the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawUpdate")]
pub struct Update {
    pub update_id: i64,
    pub payload: UpdatePayload,
}

/// The populated payload of an [`Update`].
#[derive(Debug, Clone)]
pub enum UpdatePayload {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    /// A payload kind this client does not model.
    Unknown,
}

impl UpdatePayload {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::EditedMessage(_) => "edited_message",
            Self::ChannelPost(_) => "channel_post",
            Self::EditedChannelPost(_) => "edited_channel_post",
            Self::InlineQuery(_) => "inline_query",
            Self::ChosenInlineResult(_) => "chosen_inline_result",
            Self::CallbackQuery(_) => "callback_query",
            Self::Unknown => "unknown",
        }
    }
}

impl Update {
    /// The new incoming message, if this update carries one.
    pub fn message(&self) -> Option<&Message> {
        match self.payload {
            UpdatePayload::Message(ref m) => Some(m),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawUpdate {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
    #[serde(default)]
    edited_message: Option<Message>,
    #[serde(default)]
    channel_post: Option<Message>,
    #[serde(default)]
    edited_channel_post: Option<Message>,
    #[serde(default)]
    inline_query: Option<InlineQuery>,
    #[serde(default)]
    chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(default)]
    callback_query: Option<CallbackQuery>,
}

impl From<RawUpdate> for Update {
    fn from(raw: RawUpdate) -> Self {
        let payload = if let Some(m) = raw.message {
            UpdatePayload::Message(m)
        } else if let Some(m) = raw.edited_message {
            UpdatePayload::EditedMessage(m)
        } else if let Some(m) = raw.channel_post {
            UpdatePayload::ChannelPost(m)
        } else if let Some(m) = raw.edited_channel_post {
            UpdatePayload::EditedChannelPost(m)
        } else if let Some(q) = raw.inline_query {
            UpdatePayload::InlineQuery(q)
        } else if let Some(r) = raw.chosen_inline_result {
            UpdatePayload::ChosenInlineResult(r)
        } else if let Some(q) = raw.callback_query {
            UpdatePayload::CallbackQuery(q)
        } else {
            UpdatePayload::Unknown
        };
        Self {
            update_id: raw.update_id,
            payload,
        }
    }
}

/// Update kinds that can be requested through `allowed_updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
}

/// Current webhook status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty when no webhook is set.
    pub url: String,
    #[serde(default)]
    pub has_custom_certificate: bool,
    #[serde(default)]
    pub pending_update_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}
