use super::model::*;
use crate::prelude::*;
use crate::telegram::ChannelRef;
use crate::{err, err_ctx, fatal, http, util, Result};

util::url::def!(telegram_api, "https://api.telegram.org");

/// Hand-rolled `sendMessage` client.
///
/// The announcement scripts talk to the Bot API directly instead of going
/// through a bot framework: one method, one attempt, and the raw response
/// body stays available for error reporting.
pub(crate) struct Client {
    http: http::Client,
    token: String,
}

impl Client {
    pub(crate) fn new(token: impl Into<String>, http: http::Client) -> Self {
        Self {
            http,
            token: token.into(),
        }
    }

    /// Posts `text` to the given chat. A non-2xx status code or an
    /// `ok: false` envelope both surface the raw response body in the error.
    pub(crate) async fn send_message(
        &self,
        chat_id: &ChannelRef,
        text: &str,
        opts: SendMessageOptions,
    ) -> Result<SentMessage> {
        let request = SendMessageRequest {
            chat_id: chat_id.as_str(),
            text,
            parse_mode: opts.parse_mode,
            disable_web_page_preview: opts.disable_web_page_preview,
        };

        let url = telegram_api([format!("bot{}", self.token), "sendMessage".to_owned()]);

        let bytes = self.http.post(url).json(&request).read_bytes().await?;

        let response: SendMessageResponse = serde_json::from_slice(&bytes)
            .map_err(err_ctx!(http::HttpClientError::UnexpectedResponseJsonShape))?;

        if !response.ok {
            warn!(description = ?response.description, "Telegram refused the message");
            return Err(err!(ApiError::Rejected {
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }));
        }

        response
            .result
            .ok_or_else(|| fatal!("sendMessage returned ok: true without a result"))
    }
}

/// Optional `sendMessage` parameters. The defaults match what the Bot API
/// does when the fields are omitted entirely.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SendMessageOptions {
    pub(crate) parse_mode: Option<ParseMode>,
    pub(crate) disable_web_page_preview: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test(tokio::test)]
    #[ignore]
    async fn manual_sandbox() {
        let _ = dotenvy::dotenv();

        let cfg: crate::telegram::Config = crate::config::from_env_or_panic("TELEGRAM_");

        let client = Client::new(cfg.bot_token, crate::http::create_client());

        let sent = client
            .send_message(
                &cfg.channel_id,
                "Manual sandbox check, please ignore",
                SendMessageOptions::default(),
            )
            .await
            .unwrap();

        eprintln!("message_id: {}", sent.message_id);
    }
}
