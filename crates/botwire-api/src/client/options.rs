//! Optional arguments of client operations.
//!
//! Every field is an `Option`; `None` is left out of the request entirely,
//! so an explicit `Some(false)` or `Some(0)` is still sent.

use crate::input_file::InputFile;
use crate::params::Params;
use botwire_core::{
    error::BotError,
    types::{ChatId, InlineKeyboardMarkup, MaskPosition, Message, ReplyMarkup, UpdateKind},
};
use serde::Deserialize;

/// Options shared by every send operation.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendOptions {
    /// Reply to a message.
    pub fn reply_to(message_id: i64) -> Self {
        Self {
            reply_to_message_id: Some(message_id),
            ..Default::default()
        }
    }

    pub(crate) fn apply(&self, params: Params) -> Result<Params, BotError> {
        params
            .with_opt("disable_notification", self.disable_notification)
            .with_opt("reply_to_message_id", self.reply_to_message_id)
            .with_json_opt("reply_markup", self.reply_markup.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetUpdates {
    pub offset: Option<i64>,
    pub limit: Option<u32>,
    /// Server-side long-poll timeout in seconds.
    pub timeout: Option<u64>,
    pub allowed_updates: Option<Vec<UpdateKind>>,
}

#[derive(Debug, Clone, Default)]
pub struct SetWebhook {
    /// Self-signed public key certificate to upload.
    pub certificate: Option<InputFile>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<UpdateKind>>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    /// "Markdown" or "HTML".
    pub parse_mode: Option<String>,
    pub disable_web_page_preview: Option<bool>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct PhotoOptions {
    pub caption: Option<String>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct AudioOptions {
    pub caption: Option<String>,
    pub duration: Option<i64>,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub caption: Option<String>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct VideoOptions {
    pub duration: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub caption: Option<String>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct VoiceOptions {
    pub caption: Option<String>,
    pub duration: Option<i64>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct VideoNoteOptions {
    pub duration: Option<i64>,
    /// Diameter of the round video.
    pub length: Option<i64>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct VenueOptions {
    pub foursquare_id: Option<String>,
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default)]
pub struct ContactOptions {
    pub last_name: Option<String>,
    pub send: SendOptions,
}

/// Activity shown to the chat while the bot prepares a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

impl ChatAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallbackAnswer {
    pub text: Option<String>,
    pub show_alert: Option<bool>,
    pub url: Option<String>,
    pub cache_time: Option<i64>,
}

/// Which message an edit applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRef {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline(String),
}

impl MessageRef {
    pub(crate) fn apply(&self, params: Params) -> Params {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => params.with("chat_id", chat_id).with("message_id", *message_id),
            Self::Inline(id) => params.with("inline_message_id", id),
        }
    }
}

/// Edits of chat messages return the message; edits of inline messages
/// return `true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EditResult {
    Message(Box<Message>),
    Done(bool),
}

#[derive(Debug, Clone, Default)]
pub struct EditTextOptions {
    pub parse_mode: Option<String>,
    pub disable_web_page_preview: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default)]
pub struct InlineAnswerOptions {
    pub cache_time: Option<i64>,
    pub is_personal: Option<bool>,
    pub next_offset: Option<String>,
    pub switch_pm_text: Option<String>,
    pub switch_pm_parameter: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GameScoreOptions {
    pub force: Option<bool>,
    pub disable_edit_message: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct StickerSetOptions {
    pub contains_masks: Option<bool>,
    pub mask_position: Option<MaskPosition>,
}
