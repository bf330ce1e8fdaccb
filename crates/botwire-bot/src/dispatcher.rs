//! Routes updates to [`UpdateHandler`] hooks.

use botwire_core::{
    config::UnknownMessagePolicy,
    error::BotError,
    traits::UpdateHandler,
    types::{CallbackQuery, Message, MessageKind, Update, UpdatePayload},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Invokes exactly one handler hook per dispatchable update.
///
/// The [`UnknownMessagePolicy`] applies to updates that cannot be decoded
/// and to messages of no known category, in both delivery modes. Clones
/// share the handler.
pub struct Dispatcher<H> {
    handler: Arc<H>,
    unknown_messages: UnknownMessagePolicy,
}

impl<H> Clone for Dispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            unknown_messages: self.unknown_messages,
        }
    }
}

impl<H: UpdateHandler> Dispatcher<H> {
    pub fn new(handler: H) -> Self {
        Self::from_arc(Arc::new(handler))
    }

    pub fn from_arc(handler: Arc<H>) -> Self {
        Self {
            handler,
            unknown_messages: UnknownMessagePolicy::default(),
        }
    }

    pub fn with_unknown_messages(mut self, policy: UnknownMessagePolicy) -> Self {
        self.unknown_messages = policy;
        self
    }

    pub fn unknown_messages(&self) -> UnknownMessagePolicy {
        self.unknown_messages
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Decode one raw update and dispatch it.
    ///
    /// A decode failure is a [`BotError::Serialization`] under the `stop`
    /// policy and is logged and dropped under `skip`.
    pub async fn dispatch_value(&self, value: &Value) -> Result<(), BotError> {
        let update: Update = match serde_json::from_value(value.clone()) {
            Ok(u) => u,
            Err(e) if self.unknown_messages == UnknownMessagePolicy::Skip => {
                let update_id = value.get("update_id").cloned().unwrap_or(Value::Null);
                warn!("skipping undecodable update {update_id}: {e}");
                return Ok(());
            }
            Err(e) => return Err(BotError::Serialization(e)),
        };
        self.dispatch_update(&update).await
    }

    /// Route an update by payload.
    ///
    /// New messages go through [`dispatch_message`](Self::dispatch_message),
    /// callback and inline queries to their hooks. Other payloads are skipped.
    pub async fn dispatch_update(&self, update: &Update) -> Result<(), BotError> {
        match self.route(update).await {
            Err(BotError::UnknownMessageType)
                if self.unknown_messages == UnknownMessagePolicy::Skip =>
            {
                warn!("skipping update {}: unknown message type", update.update_id);
                Ok(())
            }
            result => result,
        }
    }

    async fn route(&self, update: &Update) -> Result<(), BotError> {
        match update.payload {
            UpdatePayload::Message(ref message) => self.dispatch_message(message).await,
            UpdatePayload::CallbackQuery(ref query) => self.dispatch_callback_query(query).await,
            UpdatePayload::InlineQuery(ref query) => self.handler.on_inline_query(query).await,
            ref other => {
                debug!(
                    "skipping {} update {}",
                    other.name(),
                    update.update_id
                );
                Ok(())
            }
        }
    }

    /// Invoke the hook matching the message's category.
    ///
    /// Fails with [`BotError::UnknownMessageType`] when the message has no
    /// known content.
    pub async fn dispatch_message(&self, message: &Message) -> Result<(), BotError> {
        debug!(
            "dispatching {} message {} in chat {}",
            message.kind.name(),
            message.message_id,
            message.chat.id
        );
        let h = &self.handler;
        match message.kind {
            MessageKind::Text(_) => h.on_text(message).await,
            MessageKind::Audio(_) => h.on_audio(message).await,
            MessageKind::Document(_) => h.on_document(message).await,
            MessageKind::Game(_) => h.on_game(message).await,
            MessageKind::Photo(_) => h.on_photo(message).await,
            MessageKind::Sticker(_) => h.on_sticker(message).await,
            MessageKind::Video(_) => h.on_video(message).await,
            MessageKind::Voice(_) => h.on_voice(message).await,
            MessageKind::VideoNote(_) => h.on_video_note(message).await,
            MessageKind::Caption(_) => h.on_caption(message).await,
            MessageKind::Contact(_) => h.on_contact(message).await,
            MessageKind::Location(_) => h.on_location(message).await,
            MessageKind::Venue(_) => h.on_venue(message).await,
            MessageKind::NewChatMembers(_) => h.on_new_chat_members(message).await,
            MessageKind::LeftChatMember(_) => h.on_left_chat_member(message).await,
            MessageKind::NewChatTitle(_) => h.on_new_chat_title(message).await,
            MessageKind::NewChatPhoto(_) => h.on_new_chat_photo(message).await,
            MessageKind::DeleteChatPhoto => h.on_delete_chat_photo(message).await,
            MessageKind::GroupChatCreated => h.on_group_chat_created(message).await,
            MessageKind::SupergroupChatCreated => h.on_supergroup_chat_created(message).await,
            MessageKind::ChannelChatCreated => h.on_channel_chat_created(message).await,
            MessageKind::PinnedMessage(_) => h.on_pinned_message(message).await,
            MessageKind::Unknown => Err(BotError::UnknownMessageType),
        }
    }

    /// Button data wins over a game short name; a query with neither is ignored.
    pub async fn dispatch_callback_query(&self, query: &CallbackQuery) -> Result<(), BotError> {
        if query.data.is_some() {
            self.handler.on_callback_data(query).await
        } else if query.game_short_name.is_some() {
            self.handler.on_game_short_name(query).await
        } else {
            debug!("callback query {} carries neither data nor game", query.id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{update, RecordingHandler};
    use serde_json::json;

    fn message(fields: serde_json::Value) -> Message {
        let mut value = json!({
            "message_id": 1,
            "date": 0,
            "chat": {"id": 10, "type": "group", "title": "g"}
        });
        for (k, v) in fields.as_object().unwrap() {
            value[k] = v.clone();
        }
        serde_json::from_value(value).unwrap()
    }

    async fn hook_for(fields: serde_json::Value) -> Vec<String> {
        let dispatcher = Dispatcher::new(RecordingHandler::default());
        dispatcher.dispatch_message(&message(fields)).await.unwrap();
        dispatcher.handler().calls()
    }

    #[tokio::test]
    async fn test_each_category_reaches_its_hook() {
        let user = json!({"id": 5, "first_name": "Bo"});
        let photo = json!([{"file_id": "p", "width": 1, "height": 1}]);
        let cases = vec![
            (json!({"text": "hi"}), "text"),
            (json!({"audio": {"file_id": "a", "duration": 3}}), "audio"),
            (json!({"document": {"file_id": "d"}}), "document"),
            (
                json!({"game": {"title": "g", "description": "d", "photo": photo}}),
                "game",
            ),
            (json!({"photo": photo}), "photo"),
            (
                json!({"sticker": {"file_id": "s", "width": 1, "height": 1}}),
                "sticker",
            ),
            (
                json!({"video": {"file_id": "v", "width": 1, "height": 1, "duration": 1}}),
                "video",
            ),
            (json!({"voice": {"file_id": "o", "duration": 1}}), "voice"),
            (
                json!({"video_note": {"file_id": "n", "length": 1, "duration": 1}}),
                "video_note",
            ),
            (json!({"caption": "c"}), "caption"),
            (
                json!({"contact": {"phone_number": "1", "first_name": "C"}}),
                "contact",
            ),
            (
                json!({"location": {"latitude": 1.0, "longitude": 2.0}}),
                "location",
            ),
            (
                json!({"venue": {
                    "location": {"latitude": 1.0, "longitude": 2.0},
                    "title": "t", "address": "a"
                }}),
                "venue",
            ),
            (json!({"new_chat_members": [user]}), "new_chat_members"),
            (json!({"new_chat_member": user}), "new_chat_members"),
            (json!({"left_chat_member": user}), "left_chat_member"),
            (json!({"new_chat_title": "t"}), "new_chat_title"),
            (json!({"new_chat_photo": photo}), "new_chat_photo"),
            (json!({"delete_chat_photo": true}), "delete_chat_photo"),
            (json!({"group_chat_created": true}), "group_chat_created"),
            (
                json!({"supergroup_chat_created": true}),
                "supergroup_chat_created",
            ),
            (json!({"channel_chat_created": true}), "channel_chat_created"),
            (
                json!({"pinned_message": {
                    "message_id": 2, "date": 0,
                    "chat": {"id": 10, "type": "group"}, "text": "x"
                }}),
                "pinned_message",
            ),
        ];

        for (fields, expected) in cases {
            let calls = hook_for(fields.clone()).await;
            assert_eq!(calls, vec![expected.to_string()], "fields: {fields}");
        }
    }

    #[tokio::test]
    async fn test_text_beats_caption() {
        let calls = hook_for(json!({"caption": "c", "text": "t"})).await;
        assert_eq!(calls, vec!["text"]);
    }

    #[tokio::test]
    async fn test_photo_with_caption_is_photo() {
        let calls = hook_for(json!({
            "caption": "look",
            "photo": [{"file_id": "p", "width": 1, "height": 1}]
        }))
        .await;
        assert_eq!(calls, vec!["photo"]);
    }

    #[tokio::test]
    async fn test_unknown_message_fails_without_calling_hooks() {
        let dispatcher = Dispatcher::new(RecordingHandler::default());
        let err = dispatcher
            .dispatch_message(&message(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::UnknownMessageType));
        assert_eq!(err.to_string(), "unknown message type");
        assert!(dispatcher.handler().calls().is_empty());
    }

    #[tokio::test]
    async fn test_handler_error_propagates() {
        let dispatcher = Dispatcher::new(RecordingHandler::failing_on("text"));
        let err = dispatcher
            .dispatch_message(&message(json!({"text": "boom"})))
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::Handler(_)));
    }

    #[tokio::test]
    async fn test_callback_query_routing() {
        let dispatcher = Dispatcher::new(RecordingHandler::default());
        let from = json!({"id": 1, "first_name": "A"});

        for payload in [
            json!({"id": "1", "from": from, "data": "go", "game_short_name": "g"}),
            json!({"id": "2", "from": from, "game_short_name": "g"}),
            json!({"id": "3", "from": from}),
        ] {
            let u = update(json!({"update_id": 1, "callback_query": payload}));
            dispatcher.dispatch_update(&u).await.unwrap();
        }
        assert_eq!(
            dispatcher.handler().calls(),
            vec!["callback_data", "game_short_name"]
        );
    }

    #[tokio::test]
    async fn test_unknown_message_in_update_follows_policy() {
        let u = update(json!({"update_id": 3, "message": {
            "message_id": 1, "date": 0, "chat": {"id": 1, "type": "private"}, "poll": {"id": "x"}
        }}));

        let stop = Dispatcher::new(RecordingHandler::default());
        assert!(matches!(
            stop.dispatch_update(&u).await,
            Err(BotError::UnknownMessageType)
        ));

        let skip = Dispatcher::new(RecordingHandler::default())
            .with_unknown_messages(UnknownMessagePolicy::Skip);
        skip.dispatch_update(&u).await.unwrap();
        assert!(skip.handler().calls().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_update_follows_policy() {
        let bad = json!({"update_id": 4, "message": {
            "message_id": 1, "date": 0, "chat": {"id": 1, "type": "private"},
            "photo": [{"file_id": "p"}]
        }});

        let stop = Dispatcher::new(RecordingHandler::default());
        assert!(matches!(
            stop.dispatch_value(&bad).await,
            Err(BotError::Serialization(_))
        ));

        let skip = Dispatcher::new(RecordingHandler::default())
            .with_unknown_messages(UnknownMessagePolicy::Skip);
        skip.dispatch_value(&bad).await.unwrap();
        assert!(skip.handler().calls().is_empty());

        let good = json!({"update_id": 5, "message": {
            "message_id": 2, "date": 0, "chat": {"id": 1, "type": "private"}, "text": "ok"
        }});
        skip.dispatch_value(&good).await.unwrap();
        assert_eq!(skip.handler().texts(), vec!["ok"]);
    }

    #[tokio::test]
    async fn test_update_routing() {
        let dispatcher = Dispatcher::new(RecordingHandler::default());
        let chat = json!({"id": 1, "type": "channel", "title": "c"});
        let updates = [
            json!({"update_id": 1, "inline_query": {
                "id": "q", "from": {"id": 1, "first_name": "A"}, "query": "cats"
            }}),
            json!({"update_id": 2, "edited_message": {
                "message_id": 1, "date": 0, "chat": chat, "text": "x"
            }}),
            json!({"update_id": 3, "channel_post": {
                "message_id": 2, "date": 0, "chat": chat, "text": "y"
            }}),
            json!({"update_id": 4}),
            json!({"update_id": 5, "message": {
                "message_id": 3, "date": 0, "chat": chat, "text": "z"
            }}),
        ];
        for u in updates {
            dispatcher.dispatch_update(&update(u)).await.unwrap();
        }
        assert_eq!(dispatcher.handler().calls(), vec!["inline_query", "text"]);
    }
}
