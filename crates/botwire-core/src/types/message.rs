//! Messages and their content classification.
//!
//! A message arrives as a record with many optional fields, of which at most
//! one describes its content. [`MessageKind`] is resolved once at decode time
//! by checking those fields in a fixed priority order; the first populated one
//! wins, so malformed input carrying e.g. both `text` and `caption` still
//! yields exactly one category.

use super::chat::{Chat, User};
use super::media::*;
use serde::Deserialize;

/// A message in a chat.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawMessage")]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub date: i64,
    pub chat: Chat,
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: Option<i64>,
    pub forward_date: Option<i64>,
    pub reply_to_message: Option<Box<Message>>,
    pub edit_date: Option<i64>,
    pub author_signature: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    /// Caption of a media message. Kept here because it accompanies
    /// audio, document, photo, video and voice content.
    pub caption: Option<String>,
    pub kind: MessageKind,
}

/// The single content category of a message.
#[derive(Debug, Clone)]
pub enum MessageKind {
    Text(String),
    Audio(Audio),
    Document(Document),
    Game(Game),
    Photo(Vec<PhotoSize>),
    Sticker(Sticker),
    Video(Video),
    Voice(Voice),
    VideoNote(VideoNote),
    Caption(String),
    Contact(Contact),
    Location(Location),
    Venue(Venue),
    NewChatMembers(Vec<User>),
    LeftChatMember(User),
    NewChatTitle(String),
    NewChatPhoto(Vec<PhotoSize>),
    DeleteChatPhoto,
    GroupChatCreated,
    SupergroupChatCreated,
    ChannelChatCreated,
    PinnedMessage(Box<Message>),
    /// None of the known content fields was populated.
    Unknown,
}

impl MessageKind {
    /// Short category name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Audio(_) => "audio",
            Self::Document(_) => "document",
            Self::Game(_) => "game",
            Self::Photo(_) => "photo",
            Self::Sticker(_) => "sticker",
            Self::Video(_) => "video",
            Self::Voice(_) => "voice",
            Self::VideoNote(_) => "video_note",
            Self::Caption(_) => "caption",
            Self::Contact(_) => "contact",
            Self::Location(_) => "location",
            Self::Venue(_) => "venue",
            Self::NewChatMembers(_) => "new_chat_members",
            Self::LeftChatMember(_) => "left_chat_member",
            Self::NewChatTitle(_) => "new_chat_title",
            Self::NewChatPhoto(_) => "new_chat_photo",
            Self::DeleteChatPhoto => "delete_chat_photo",
            Self::GroupChatCreated => "group_chat_created",
            Self::SupergroupChatCreated => "supergroup_chat_created",
            Self::ChannelChatCreated => "channel_chat_created",
            Self::PinnedMessage(_) => "pinned_message",
            Self::Unknown => "unknown",
        }
    }

    /// Take the highest-priority populated content field out of `raw`.
    ///
    /// The order of the checks below is the dispatch priority.
    fn take_from(raw: &mut RawMessage) -> Self {
        if let Some(text) = raw.text.take() {
            return Self::Text(text);
        }
        if let Some(audio) = raw.audio.take() {
            return Self::Audio(audio);
        }
        if let Some(document) = raw.document.take() {
            return Self::Document(document);
        }
        if let Some(game) = raw.game.take() {
            return Self::Game(game);
        }
        if let Some(photo) = raw.photo.take() {
            return Self::Photo(photo);
        }
        if let Some(sticker) = raw.sticker.take() {
            return Self::Sticker(sticker);
        }
        if let Some(video) = raw.video.take() {
            return Self::Video(video);
        }
        if let Some(voice) = raw.voice.take() {
            return Self::Voice(voice);
        }
        if let Some(note) = raw.video_note.take() {
            return Self::VideoNote(note);
        }
        if let Some(ref caption) = raw.caption {
            return Self::Caption(caption.clone());
        }
        if let Some(contact) = raw.contact.take() {
            return Self::Contact(contact);
        }
        if let Some(location) = raw.location.take() {
            return Self::Location(location);
        }
        if let Some(venue) = raw.venue.take() {
            return Self::Venue(venue);
        }
        if let Some(members) = raw.new_chat_members.take() {
            return Self::NewChatMembers(members);
        }
        // Older payloads carry a single joined member.
        if let Some(member) = raw.new_chat_member.take() {
            return Self::NewChatMembers(vec![member]);
        }
        if let Some(user) = raw.left_chat_member.take() {
            return Self::LeftChatMember(user);
        }
        if let Some(title) = raw.new_chat_title.take() {
            return Self::NewChatTitle(title);
        }
        if let Some(photo) = raw.new_chat_photo.take() {
            return Self::NewChatPhoto(photo);
        }
        if raw.delete_chat_photo.is_some() {
            return Self::DeleteChatPhoto;
        }
        if raw.group_chat_created.is_some() {
            return Self::GroupChatCreated;
        }
        if raw.supergroup_chat_created.is_some() {
            return Self::SupergroupChatCreated;
        }
        if raw.channel_chat_created.is_some() {
            return Self::ChannelChatCreated;
        }
        if let Some(pinned) = raw.pinned_message.take() {
            return Self::PinnedMessage(pinned);
        }
        Self::Unknown
    }
}

impl Message {
    /// Text content, if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            MessageKind::Text(ref text) => Some(text),
            _ => None,
        }
    }

    /// Whether the message matched none of the known categories.
    pub fn is_unknown(&self) -> bool {
        matches!(self.kind, MessageKind::Unknown)
    }
}

/// Wire shape of a message, before classification.
#[derive(Debug, Deserialize)]
struct RawMessage {
    message_id: i64,
    #[serde(default)]
    from: Option<User>,
    #[serde(default)]
    date: i64,
    chat: Chat,
    #[serde(default)]
    forward_from: Option<User>,
    #[serde(default)]
    forward_from_chat: Option<Chat>,
    #[serde(default)]
    forward_from_message_id: Option<i64>,
    #[serde(default)]
    forward_date: Option<i64>,
    #[serde(default)]
    reply_to_message: Option<Box<Message>>,
    #[serde(default)]
    edit_date: Option<i64>,
    #[serde(default)]
    author_signature: Option<String>,
    #[serde(default)]
    entities: Option<Vec<MessageEntity>>,
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<Audio>,
    #[serde(default)]
    document: Option<Document>,
    #[serde(default)]
    game: Option<Game>,
    #[serde(default)]
    photo: Option<Vec<PhotoSize>>,
    #[serde(default)]
    sticker: Option<Sticker>,
    #[serde(default)]
    video: Option<Video>,
    #[serde(default)]
    voice: Option<Voice>,
    #[serde(default)]
    video_note: Option<VideoNote>,
    #[serde(default)]
    contact: Option<Contact>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    venue: Option<Venue>,
    #[serde(default)]
    new_chat_members: Option<Vec<User>>,
    #[serde(default)]
    new_chat_member: Option<User>,
    #[serde(default)]
    left_chat_member: Option<User>,
    #[serde(default)]
    new_chat_title: Option<String>,
    #[serde(default)]
    new_chat_photo: Option<Vec<PhotoSize>>,
    #[serde(default)]
    delete_chat_photo: Option<bool>,
    #[serde(default)]
    group_chat_created: Option<bool>,
    #[serde(default)]
    supergroup_chat_created: Option<bool>,
    #[serde(default)]
    channel_chat_created: Option<bool>,
    #[serde(default)]
    pinned_message: Option<Box<Message>>,
}

impl From<RawMessage> for Message {
    fn from(mut raw: RawMessage) -> Self {
        let kind = MessageKind::take_from(&mut raw);
        Self {
            message_id: raw.message_id,
            from: raw.from,
            date: raw.date,
            chat: raw.chat,
            forward_from: raw.forward_from,
            forward_from_chat: raw.forward_from_chat,
            forward_from_message_id: raw.forward_from_message_id,
            forward_date: raw.forward_date,
            reply_to_message: raw.reply_to_message,
            edit_date: raw.edit_date,
            author_signature: raw.author_signature,
            entities: raw.entities,
            caption: raw.caption,
            kind,
        }
    }
}
