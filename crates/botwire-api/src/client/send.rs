//! Send operations.
//!
//! Media arguments decide the request shape: a file id or URL goes out as
//! GET, an [`InputFile`](crate::InputFile) as multipart POST.

use super::*;
use crate::params::Media;
use botwire_core::types::{ChatId, Message};

impl BotClient {
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        opts: &MessageOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("text", text)
            .with_opt("parse_mode", opts.parse_mode.as_deref())
            .with_opt("disable_web_page_preview", opts.disable_web_page_preview);
        let params = opts.send.apply(params)?;
        self.call("sendMessage", params).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        disable_notification: Option<bool>,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("from_chat_id", from_chat_id.into())
            .with("message_id", message_id)
            .with_opt("disable_notification", disable_notification);
        self.call("forwardMessage", params).await
    }

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: impl Into<Media>,
        opts: &PhotoOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("photo", photo.into())
            .with_opt("caption", opts.caption.as_deref());
        let params = opts.send.apply(params)?;
        self.call("sendPhoto", params).await
    }

    pub async fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: impl Into<Media>,
        opts: &AudioOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("audio", audio.into())
            .with_opt("caption", opts.caption.as_deref())
            .with_opt("duration", opts.duration)
            .with_opt("performer", opts.performer.as_deref())
            .with_opt("title", opts.title.as_deref());
        let params = opts.send.apply(params)?;
        self.call("sendAudio", params).await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: impl Into<Media>,
        opts: &DocumentOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("document", document.into())
            .with_opt("caption", opts.caption.as_deref());
        let params = opts.send.apply(params)?;
        self.call("sendDocument", params).await
    }

    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: impl Into<Media>,
        opts: &VideoOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("video", video.into())
            .with_opt("duration", opts.duration)
            .with_opt("width", opts.width)
            .with_opt("height", opts.height)
            .with_opt("caption", opts.caption.as_deref());
        let params = opts.send.apply(params)?;
        self.call("sendVideo", params).await
    }

    pub async fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: impl Into<Media>,
        opts: &VoiceOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("voice", voice.into())
            .with_opt("caption", opts.caption.as_deref())
            .with_opt("duration", opts.duration);
        let params = opts.send.apply(params)?;
        self.call("sendVoice", params).await
    }

    pub async fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: impl Into<Media>,
        opts: &VideoNoteOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("video_note", video_note.into())
            .with_opt("duration", opts.duration)
            .with_opt("length", opts.length);
        let params = opts.send.apply(params)?;
        self.call("sendVideoNote", params).await
    }

    pub async fn send_sticker(
        &self,
        chat_id: impl Into<ChatId>,
        sticker: impl Into<Media>,
        opts: &SendOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("sticker", sticker.into());
        let params = opts.apply(params)?;
        self.call("sendSticker", params).await
    }

    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        opts: &SendOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("latitude", latitude)
            .with("longitude", longitude);
        let params = opts.apply(params)?;
        self.call("sendLocation", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        opts: &VenueOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("latitude", latitude)
            .with("longitude", longitude)
            .with("title", title)
            .with("address", address)
            .with_opt("foursquare_id", opts.foursquare_id.as_deref());
        let params = opts.send.apply(params)?;
        self.call("sendVenue", params).await
    }

    pub async fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: &str,
        first_name: &str,
        opts: &ContactOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("phone_number", phone_number)
            .with("first_name", first_name)
            .with_opt("last_name", opts.last_name.as_deref());
        let params = opts.send.apply(params)?;
        self.call("sendContact", params).await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id.into())
            .with("action", action.as_str());
        self.call("sendChatAction", params).await
    }
}
