//! Built-in demo handler: echoes text back, logs everything else.

use async_trait::async_trait;
use botwire_api::client::{CallbackAnswer, InlineAnswerOptions, MessageOptions, SendOptions};
use botwire_api::BotClient;
use botwire_core::{
    error::BotError,
    traits::UpdateHandler,
    types::{CallbackQuery, InlineQuery, InlineQueryResult, Message},
};
use tracing::info;

pub struct EchoHandler {
    client: BotClient,
}

impl EchoHandler {
    pub fn new(client: BotClient) -> Self {
        Self { client }
    }

    fn log(&self, message: &Message) {
        let from = message
            .from
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "unknown".to_string());
        info!(
            "{} message from {from} in chat {}",
            message.kind.name(),
            message.chat.id
        );
    }
}

#[async_trait]
impl UpdateHandler for EchoHandler {
    async fn on_text(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        let Some(text) = message.text() else {
            return Ok(());
        };
        let opts = MessageOptions {
            send: SendOptions::reply_to(message.message_id),
            ..Default::default()
        };
        self.client
            .send_message(message.chat.id, text, &opts)
            .await?;
        Ok(())
    }

    async fn on_photo(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        Ok(())
    }

    async fn on_sticker(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        Ok(())
    }

    async fn on_document(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        Ok(())
    }

    async fn on_voice(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        Ok(())
    }

    async fn on_caption(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        Ok(())
    }

    async fn on_new_chat_members(&self, message: &Message) -> Result<(), BotError> {
        self.log(message);
        Ok(())
    }

    async fn on_callback_data(&self, query: &CallbackQuery) -> Result<(), BotError> {
        let answer = CallbackAnswer {
            text: query.data.clone(),
            ..Default::default()
        };
        self.client.answer_callback_query(&query.id, &answer).await?;
        Ok(())
    }

    async fn on_inline_query(&self, query: &InlineQuery) -> Result<(), BotError> {
        if query.query.is_empty() {
            return Ok(());
        }
        let results = [InlineQueryResult::article(
            "echo",
            format!("Echo \"{}\"", query.query),
            query.query.clone(),
        )];
        self.client
            .answer_inline_query(&query.id, &results, &InlineAnswerOptions::default())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botwire_api::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn handler(mock: &Arc<MockTransport>) -> EchoHandler {
        EchoHandler::new(BotClient::with_transport("T", mock.clone()).unwrap())
    }

    #[tokio::test]
    async fn test_text_is_echoed_as_reply() {
        let mock = Arc::new(MockTransport::new());
        let incoming: Message = serde_json::from_value(json!({
            "message_id": 4, "date": 0,
            "chat": {"id": 77, "type": "private"},
            "text": "ping"
        }))
        .unwrap();
        mock.push_ok(json!({
            "message_id": 5, "date": 0,
            "chat": {"id": 77, "type": "private"},
            "text": "ping"
        }));

        handler(&mock).on_text(&incoming).await.unwrap();

        let req = &mock.requests()[0];
        assert_eq!(req.api_method, "sendMessage");
        assert_eq!(req.param("chat_id"), Some("77"));
        assert_eq!(req.param("text"), Some("ping"));
        assert_eq!(req.param("reply_to_message_id"), Some("4"));
    }

    #[tokio::test]
    async fn test_send_failure_surfaces_as_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(json!({"ok": false, "description": "Forbidden"}));
        let incoming: Message = serde_json::from_value(json!({
            "message_id": 4, "date": 0,
            "chat": {"id": 77, "type": "private"},
            "text": "ping"
        }))
        .unwrap();

        let err = handler(&mock).on_text(&incoming).await.unwrap_err();
        assert!(matches!(err, BotError::Api { .. }));
    }

    #[tokio::test]
    async fn test_empty_inline_query_is_ignored() {
        let mock = Arc::new(MockTransport::new());
        let query: InlineQuery = serde_json::from_value(json!({
            "id": "q", "from": {"id": 1, "first_name": "A"}, "query": ""
        }))
        .unwrap();

        handler(&mock).on_inline_query(&query).await.unwrap();
        assert!(mock.requests().is_empty());
    }
}
