use super::chat::User;
use super::markup::InlineKeyboardMarkup;
use super::media::Location;
use super::message::Message;
use serde::{Deserialize, Serialize};

/// An incoming inline query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub location: Option<Location>,
    pub query: String,
    #[serde(default)]
    pub offset: String,
}

/// An inline result that was chosen by a user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub inline_message_id: Option<String>,
    pub query: String,
}

/// A press on an inline keyboard button.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub inline_message_id: Option<String>,
    #[serde(default)]
    pub chat_instance: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub game_short_name: Option<String>,
}

/// Content sent when an inline result is chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text {
        message_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        parse_mode: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_web_page_preview: Option<bool>,
    },
    Location {
        latitude: f64,
        longitude: f64,
    },
}

/// One result of an inline query answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineQueryResult {
    Article {
        id: String,
        title: String,
        input_message_content: InputMessageContent,
        #[serde(skip_serializing_if = "Option::is_none")]
        reply_markup: Option<InlineKeyboardMarkup>,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumb_url: Option<String>,
    },
    Photo {
        id: String,
        photo_url: String,
        thumb_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reply_markup: Option<InlineKeyboardMarkup>,
    },
    Document {
        id: String,
        title: String,
        document_url: String,
        mime_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl InlineQueryResult {
    /// A plain text article result.
    pub fn article(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Article {
            id: id.into(),
            title: title.into(),
            input_message_content: InputMessageContent::Text {
                message_text: text.into(),
                parse_mode: None,
                disable_web_page_preview: None,
            },
            reply_markup: None,
            url: None,
            description: None,
            thumb_url: None,
        }
    }
}
