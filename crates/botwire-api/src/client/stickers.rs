//! Sticker set management.

use super::{BotClient, StickerSetOptions};
use crate::input_file::InputFile;
use crate::params::{Media, Params};
use botwire_core::{
    error::BotError,
    types::{File, MaskPosition, StickerSet},
};

impl BotClient {
    pub async fn get_sticker_set(&self, name: &str) -> Result<StickerSet, BotError> {
        let params = Params::new().with("name", name);
        self.call("getStickerSet", params).await
    }

    /// Upload a PNG for later use in sticker sets. Always a multipart POST.
    pub async fn upload_sticker_file(
        &self,
        user_id: i64,
        png_sticker: InputFile,
    ) -> Result<File, BotError> {
        let params = Params::new()
            .with("user_id", user_id)
            .with("png_sticker", png_sticker);
        self.post("uploadStickerFile", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_new_sticker_set(
        &self,
        user_id: i64,
        name: &str,
        title: &str,
        png_sticker: impl Into<Media>,
        emojis: &str,
        opts: &StickerSetOptions,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("user_id", user_id)
            .with("name", name)
            .with("title", title)
            .with("png_sticker", png_sticker.into())
            .with("emojis", emojis)
            .with_opt("contains_masks", opts.contains_masks)
            .with_json_opt("mask_position", opts.mask_position.as_ref())?;
        self.call("createNewStickerSet", params).await
    }

    pub async fn add_sticker_to_set(
        &self,
        user_id: i64,
        name: &str,
        png_sticker: impl Into<Media>,
        emojis: &str,
        mask_position: Option<&MaskPosition>,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("user_id", user_id)
            .with("name", name)
            .with("png_sticker", png_sticker.into())
            .with("emojis", emojis)
            .with_json_opt("mask_position", mask_position)?;
        self.call("addStickerToSet", params).await
    }

    pub async fn set_sticker_position_in_set(
        &self,
        sticker: &str,
        position: i64,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("sticker", sticker)
            .with("position", position);
        self.call("setStickerPositionInSet", params).await
    }

    pub async fn delete_sticker_from_set(&self, sticker: &str) -> Result<bool, BotError> {
        let params = Params::new().with("sticker", sticker);
        self.call("deleteStickerFromSet", params).await
    }
}
