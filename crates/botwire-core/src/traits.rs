use crate::{
    error::BotError,
    types::{CallbackQuery, InlineQuery, Message},
};
use async_trait::async_trait;

/// Update handler with one hook per message category.
///
/// Every method defaults to a no-op, so implementations override only the
/// categories they care about. Exactly one `on_*` message hook runs per
/// message; which one is decided by the message's [`MessageKind`].
///
/// [`MessageKind`]: crate::types::MessageKind
#[async_trait]
pub trait UpdateHandler: Send + Sync {
    async fn on_text(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_audio(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_document(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_game(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_photo(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_sticker(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_video(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_voice(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_video_note(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    /// A message with only a caption (no recognised media).
    async fn on_caption(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_contact(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_location(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_venue(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_new_chat_members(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_left_chat_member(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_new_chat_title(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_new_chat_photo(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_delete_chat_photo(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_group_chat_created(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_supergroup_chat_created(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_channel_chat_created(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_pinned_message(&self, _message: &Message) -> Result<(), BotError> {
        Ok(())
    }

    /// Callback query carrying button data.
    async fn on_callback_data(&self, _query: &CallbackQuery) -> Result<(), BotError> {
        Ok(())
    }

    /// Callback query asking to open a game.
    async fn on_game_short_name(&self, _query: &CallbackQuery) -> Result<(), BotError> {
        Ok(())
    }

    async fn on_inline_query(&self, _query: &InlineQuery) -> Result<(), BotError> {
        Ok(())
    }
}
