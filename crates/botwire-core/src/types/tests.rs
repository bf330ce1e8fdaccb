//! Decoding and classification tests for platform records.

use super::*;
use serde_json::{json, Value};

fn base_message() -> Value {
    json!({
        "message_id": 1,
        "date": 0,
        "chat": {"id": 9, "type": "private"},
        "from": {"id": 1, "first_name": "A"}
    })
}

fn message_with(field: &str, value: Value) -> Message {
    let mut raw = base_message();
    raw[field] = value;
    serde_json::from_value(raw).unwrap()
}

fn photo_sizes() -> Value {
    json!([{"file_id": "p1", "width": 90, "height": 90}])
}

fn user() -> Value {
    json!({"id": 42, "first_name": "Zed"})
}

/// Every content field with a valid sample value, in dispatch priority order,
/// paired with the category name it must classify as.
fn category_samples() -> Vec<(&'static str, Value, &'static str)> {
    vec![
        ("text", json!("hi"), "text"),
        ("audio", json!({"file_id": "a", "duration": 3}), "audio"),
        ("document", json!({"file_id": "d"}), "document"),
        (
            "game",
            json!({"title": "g", "description": "d", "photo": photo_sizes()}),
            "game",
        ),
        ("photo", photo_sizes(), "photo"),
        ("sticker", json!({"file_id": "s", "width": 512, "height": 512}), "sticker"),
        (
            "video",
            json!({"file_id": "v", "width": 640, "height": 480, "duration": 10}),
            "video",
        ),
        ("voice", json!({"file_id": "vo", "duration": 2}), "voice"),
        ("video_note", json!({"file_id": "vn", "length": 240, "duration": 4}), "video_note"),
        ("caption", json!("look"), "caption"),
        ("contact", json!({"phone_number": "+100", "first_name": "C"}), "contact"),
        ("location", json!({"longitude": 1.5, "latitude": 2.5}), "location"),
        (
            "venue",
            json!({"location": {"longitude": 1.0, "latitude": 2.0}, "title": "t", "address": "a"}),
            "venue",
        ),
        ("new_chat_members", json!([user()]), "new_chat_members"),
        ("left_chat_member", user(), "left_chat_member"),
        ("new_chat_title", json!("New title"), "new_chat_title"),
        ("new_chat_photo", photo_sizes(), "new_chat_photo"),
        ("delete_chat_photo", json!(true), "delete_chat_photo"),
        ("group_chat_created", json!(true), "group_chat_created"),
        ("supergroup_chat_created", json!(true), "supergroup_chat_created"),
        ("channel_chat_created", json!(true), "channel_chat_created"),
        ("pinned_message", base_message_with_text("pinned"), "pinned_message"),
    ]
}

fn base_message_with_text(text: &str) -> Value {
    let mut m = base_message();
    m["text"] = json!(text);
    m
}

#[test]
fn test_each_single_field_classifies_to_its_category() {
    for (field, value, expected) in category_samples() {
        let msg = message_with(field, value);
        assert_eq!(msg.kind.name(), expected, "field {field}");
    }
}

#[test]
fn test_earlier_field_wins_over_every_later_one() {
    let samples = category_samples();
    for (i, (first_field, first_value, expected)) in samples.iter().enumerate() {
        for (later_field, later_value, _) in samples.iter().skip(i + 1) {
            let mut raw = base_message();
            raw[*first_field] = first_value.clone();
            raw[*later_field] = later_value.clone();
            let msg: Message = serde_json::from_value(raw).unwrap();
            assert_eq!(
                msg.kind.name(),
                *expected,
                "{first_field} should win over {later_field}"
            );
        }
    }
}

#[test]
fn test_text_and_caption_classifies_as_text() {
    let mut raw = base_message();
    raw["text"] = json!("hi");
    raw["caption"] = json!("ignored");
    let msg: Message = serde_json::from_value(raw).unwrap();
    assert_eq!(msg.text(), Some("hi"));
    // The caption is still readable on the message itself.
    assert_eq!(msg.caption.as_deref(), Some("ignored"));
}

#[test]
fn test_photo_with_caption_keeps_caption() {
    let mut raw = base_message();
    raw["photo"] = photo_sizes();
    raw["caption"] = json!("Check this out");
    let msg: Message = serde_json::from_value(raw).unwrap();
    match msg.kind {
        MessageKind::Photo(ref sizes) => assert_eq!(sizes[0].file_id, "p1"),
        ref other => panic!("expected photo, got {}", other.name()),
    }
    assert_eq!(msg.caption.as_deref(), Some("Check this out"));
}

#[test]
fn test_legacy_new_chat_member_field() {
    let msg = message_with("new_chat_member", user());
    match msg.kind {
        MessageKind::NewChatMembers(ref users) => {
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].id, 42);
        }
        ref other => panic!("expected new_chat_members, got {}", other.name()),
    }
}

#[test]
fn test_message_without_content_is_unknown() {
    let msg: Message = serde_json::from_value(base_message()).unwrap();
    assert!(msg.is_unknown());
    assert!(msg.text().is_none());

    // Fields outside the classification table do not count.
    let msg = message_with("migrate_to_chat_id", json!(-100123));
    assert!(msg.is_unknown());
}

#[test]
fn test_reply_to_message_is_decoded_recursively() {
    let msg = message_with("reply_to_message", base_message_with_text("original"));
    let reply = msg.reply_to_message.as_deref().unwrap();
    assert_eq!(reply.text(), Some("original"));
    assert!(msg.is_unknown());
}

#[test]
fn test_update_with_message() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 5,
        "message": base_message_with_text("hi")
    }))
    .unwrap();
    assert_eq!(update.update_id, 5);
    assert_eq!(update.message().and_then(Message::text), Some("hi"));
    assert_eq!(update.payload.name(), "message");
}

#[test]
fn test_update_with_callback_query() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 6,
        "callback_query": {
            "id": "cb1",
            "from": user(),
            "chat_instance": "x",
            "data": "press"
        }
    }))
    .unwrap();
    assert!(update.message().is_none());
    match update.payload {
        UpdatePayload::CallbackQuery(ref q) => assert_eq!(q.data.as_deref(), Some("press")),
        ref other => panic!("expected callback_query, got {}", other.name()),
    }
}

#[test]
fn test_update_of_unmodelled_kind_still_decodes() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 7,
        "poll": {"id": "p", "question": "?"}
    }))
    .unwrap();
    assert_eq!(update.update_id, 7);
    assert!(matches!(update.payload, UpdatePayload::Unknown));
}

#[test]
fn test_chat_type_decoding() {
    let group: Chat = serde_json::from_str(r#"{"id": -100123, "type": "group"}"#).unwrap();
    assert!(group.is_group());
    let supergroup: Chat = serde_json::from_str(r#"{"id": -100456, "type": "supergroup"}"#).unwrap();
    assert!(supergroup.is_group());
    let private: Chat = serde_json::from_str(r#"{"id": 789, "type": "private"}"#).unwrap();
    assert!(!private.is_group());
    let other: Chat = serde_json::from_str(r#"{"id": 1, "type": "forum"}"#).unwrap();
    assert_eq!(other.chat_type, ChatType::Other);
}

#[test]
fn test_user_display_name() {
    let mut u: User = serde_json::from_value(user()).unwrap();
    assert_eq!(u.display_name(), "Zed");
    u.last_name = Some("Z".into());
    assert_eq!(u.display_name(), "Zed Z");
    u.username = Some("zed".into());
    assert_eq!(u.display_name(), "@zed");
}

#[test]
fn test_reply_markup_serializes_untagged() {
    let markup: ReplyMarkup = InlineKeyboardMarkup {
        inline_keyboard: vec![vec![InlineKeyboardButton::callback("Yes", "y")]],
    }
    .into();
    assert_eq!(
        serde_json::to_value(&markup).unwrap(),
        json!({"inline_keyboard": [[{"text": "Yes", "callback_data": "y"}]]})
    );

    let remove: ReplyMarkup = ReplyKeyboardRemove::default().into();
    assert_eq!(
        serde_json::to_value(&remove).unwrap(),
        json!({"remove_keyboard": true})
    );
}

#[test]
fn test_inline_result_carries_type_tag() {
    let result = InlineQueryResult::article("1", "Title", "body");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["type"], "article");
    assert_eq!(value["input_message_content"]["message_text"], "body");
    assert!(value.get("url").is_none());
}

#[test]
fn test_chat_id_display() {
    assert_eq!(ChatId::from(-100i64).to_string(), "-100");
    assert_eq!(ChatId::from("@channel").to_string(), "@channel");
}
