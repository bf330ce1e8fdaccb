//! Shared test fixtures.

use async_trait::async_trait;
use botwire_core::{
    error::BotError,
    traits::UpdateHandler,
    types::{CallbackQuery, InlineQuery, Message, Update},
};
use std::sync::Mutex;

pub(crate) fn update(value: serde_json::Value) -> Update {
    serde_json::from_value(value).unwrap()
}

/// Records which hooks ran, and for messages, the text or message id.
#[derive(Default)]
pub(crate) struct RecordingHandler {
    calls: Mutex<Vec<String>>,
    texts: Mutex<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl RecordingHandler {
    pub(crate) fn failing_on(hook: &'static str) -> Self {
        Self {
            fail_on: Some(hook),
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    fn record(&self, hook: &str) -> Result<(), BotError> {
        self.calls.lock().unwrap().push(hook.to_string());
        if self.fail_on == Some(hook) {
            return Err(BotError::Handler(format!("{hook} hook failed")));
        }
        Ok(())
    }

    fn record_message(&self, hook: &str, message: &Message) -> Result<(), BotError> {
        let label = message
            .text()
            .map(str::to_string)
            .unwrap_or_else(|| message.message_id.to_string());
        self.texts.lock().unwrap().push(label);
        self.record(hook)
    }
}

#[async_trait]
impl UpdateHandler for RecordingHandler {
    async fn on_text(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("text", m)
    }
    async fn on_audio(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("audio", m)
    }
    async fn on_document(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("document", m)
    }
    async fn on_game(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("game", m)
    }
    async fn on_photo(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("photo", m)
    }
    async fn on_sticker(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("sticker", m)
    }
    async fn on_video(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("video", m)
    }
    async fn on_voice(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("voice", m)
    }
    async fn on_video_note(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("video_note", m)
    }
    async fn on_caption(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("caption", m)
    }
    async fn on_contact(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("contact", m)
    }
    async fn on_location(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("location", m)
    }
    async fn on_venue(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("venue", m)
    }
    async fn on_new_chat_members(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("new_chat_members", m)
    }
    async fn on_left_chat_member(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("left_chat_member", m)
    }
    async fn on_new_chat_title(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("new_chat_title", m)
    }
    async fn on_new_chat_photo(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("new_chat_photo", m)
    }
    async fn on_delete_chat_photo(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("delete_chat_photo", m)
    }
    async fn on_group_chat_created(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("group_chat_created", m)
    }
    async fn on_supergroup_chat_created(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("supergroup_chat_created", m)
    }
    async fn on_channel_chat_created(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("channel_chat_created", m)
    }
    async fn on_pinned_message(&self, m: &Message) -> Result<(), BotError> {
        self.record_message("pinned_message", m)
    }
    async fn on_callback_data(&self, _q: &CallbackQuery) -> Result<(), BotError> {
        self.record("callback_data")
    }
    async fn on_game_short_name(&self, _q: &CallbackQuery) -> Result<(), BotError> {
        self.record("game_short_name")
    }
    async fn on_inline_query(&self, _q: &InlineQuery) -> Result<(), BotError> {
        self.record("inline_query")
    }
}
