use super::BotClient;
use crate::params::Params;
use botwire_core::{
    error::BotError,
    types::{File, UserProfilePhotos},
};

impl BotClient {
    /// Resolve a file id into a downloadable path.
    pub async fn get_file(&self, file_id: &str) -> Result<File, BotError> {
        let params = Params::new().with("file_id", file_id);
        self.call("getFile", params).await
    }

    /// One page of a user's profile photos.
    pub async fn get_user_profile_photos(
        &self,
        user_id: i64,
        offset: Option<i64>,
        limit: Option<u32>,
    ) -> Result<UserProfilePhotos, BotError> {
        let params = Params::new()
            .with("user_id", user_id)
            .with_opt("offset", offset)
            .with_opt("limit", limit);
        self.call("getUserProfilePhotos", params).await
    }

    /// Download URL for a [`File`] returned by [`get_file`](Self::get_file).
    pub fn file_url(&self, file_path: &str) -> String {
        // Tokens never contain '/', so the last "/bot" starts the token path.
        match self.base_url.rfind("/bot") {
            Some(at) => format!(
                "{}/file{}/{file_path}",
                &self.base_url[..at],
                &self.base_url[at..]
            ),
            None => format!("{}/{file_path}", self.base_url),
        }
    }
}
