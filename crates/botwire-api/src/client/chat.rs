//! Chat administration.

use super::BotClient;
use crate::params::Params;
use botwire_core::{
    error::BotError,
    types::{Chat, ChatId, ChatMember},
};

impl BotClient {
    pub async fn kick_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("user_id", user_id);
        self.call("kickChatMember", params).await
    }

    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("user_id", user_id);
        self.call("unbanChatMember", params).await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<bool, BotError> {
        let params = Params::new().with("chat_id", chat_id.into());
        self.call("leaveChat", params).await
    }

    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Chat, BotError> {
        let params = Params::new().with("chat_id", chat_id.into());
        self.call("getChat", params).await
    }

    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> Result<Vec<ChatMember>, BotError> {
        let params = Params::new().with("chat_id", chat_id.into());
        self.call("getChatAdministrators", params).await
    }

    pub async fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> Result<i64, BotError> {
        let params = Params::new().with("chat_id", chat_id.into());
        self.call("getChatMembersCount", params).await
    }

    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<ChatMember, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("user_id", user_id);
        self.call("getChatMember", params).await
    }
}
