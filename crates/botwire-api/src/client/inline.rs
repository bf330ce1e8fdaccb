//! Inline queries and callback queries.

use super::{BotClient, CallbackAnswer, InlineAnswerOptions};
use crate::params::Params;
use botwire_core::{error::BotError, types::InlineQueryResult};

impl BotClient {
    /// Answer an inline query. Sent as multipart POST since the serialized
    /// results can exceed what fits in a query string.
    pub async fn answer_inline_query(
        &self,
        inline_query_id: &str,
        results: &[InlineQueryResult],
        opts: &InlineAnswerOptions,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("inline_query_id", inline_query_id)
            .with_json("results", results)?
            .with_opt("cache_time", opts.cache_time)
            .with_opt("is_personal", opts.is_personal)
            .with_opt("next_offset", opts.next_offset.as_deref())
            .with_opt("switch_pm_text", opts.switch_pm_text.as_deref())
            .with_opt("switch_pm_parameter", opts.switch_pm_parameter.as_deref());
        self.post("answerInlineQuery", params).await
    }

    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        answer: &CallbackAnswer,
    ) -> Result<bool, BotError> {
        let params = Params::new()
            .with("callback_query_id", callback_query_id)
            .with_opt("text", answer.text.as_deref())
            .with_opt("show_alert", answer.show_alert)
            .with_opt("url", answer.url.as_deref())
            .with_opt("cache_time", answer.cache_time);
        self.call("answerCallbackQuery", params).await
    }
}
