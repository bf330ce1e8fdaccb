//! Editing and deleting sent messages.

use super::{BotClient, EditResult, EditTextOptions, MessageRef};
use crate::params::Params;
use botwire_core::{
    error::BotError,
    types::{ChatId, InlineKeyboardMarkup},
};

impl BotClient {
    pub async fn edit_message_text(
        &self,
        target: &MessageRef,
        text: &str,
        opts: &EditTextOptions,
    ) -> Result<EditResult, BotError> {
        let params = target
            .apply(Params::new())
            .with("text", text)
            .with_opt("parse_mode", opts.parse_mode.as_deref())
            .with_opt("disable_web_page_preview", opts.disable_web_page_preview)
            .with_json_opt("reply_markup", opts.reply_markup.as_ref())?;
        self.call("editMessageText", params).await
    }

    pub async fn edit_message_caption(
        &self,
        target: &MessageRef,
        caption: Option<&str>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<EditResult, BotError> {
        let params = target
            .apply(Params::new())
            .with_opt("caption", caption)
            .with_json_opt("reply_markup", reply_markup)?;
        self.call("editMessageCaption", params).await
    }

    pub async fn edit_message_reply_markup(
        &self,
        target: &MessageRef,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<EditResult, BotError> {
        let params = target
            .apply(Params::new())
            .with_json_opt("reply_markup", reply_markup)?;
        self.call("editMessageReplyMarkup", params).await
    }

    pub async fn delete_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("message_id", message_id);
        self.call("deleteMessage", params).await
    }
}
