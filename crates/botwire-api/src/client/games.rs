use super::{BotClient, EditResult, GameScoreOptions, MessageRef, SendOptions};
use crate::params::Params;
use botwire_core::{
    error::BotError,
    types::{GameHighScore, Message},
};

impl BotClient {
    pub async fn send_game(
        &self,
        chat_id: i64,
        game_short_name: &str,
        opts: &SendOptions,
    ) -> Result<Message, BotError> {
        let params = Params::new()
            .with("chat_id", chat_id)
            .with("game_short_name", game_short_name);
        let params = opts.apply(params)?;
        self.call("sendGame", params).await
    }

    /// Set a user's score. Returns the edited game message, or `true` for
    /// inline messages.
    pub async fn set_game_score(
        &self,
        user_id: i64,
        score: i64,
        target: &MessageRef,
        opts: &GameScoreOptions,
    ) -> Result<EditResult, BotError> {
        let params = Params::new()
            .with("user_id", user_id)
            .with("score", score)
            .with_opt("force", opts.force)
            .with_opt("disable_edit_message", opts.disable_edit_message);
        let params = target.apply(params);
        self.call("setGameScore", params).await
    }

    pub async fn get_game_high_scores(
        &self,
        user_id: i64,
        target: &MessageRef,
    ) -> Result<Vec<GameHighScore>, BotError> {
        let params = target.apply(Params::new().with("user_id", user_id));
        self.call("getGameHighScores", params).await
    }
}
