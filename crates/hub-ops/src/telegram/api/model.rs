use serde::{Deserialize, Serialize};

/// The subset of `sendMessage` parameters these scripts use.
///
/// API docs: <https://core.telegram.org/bots/api#sendmessage>
#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub(crate) chat_id: &'a str,
    pub(crate) text: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parse_mode: Option<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) disable_web_page_preview: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    Markdown,
}

/// `sendMessage` response envelope. `result` is only present on success,
/// on failure Telegram explains itself in `description` instead.
#[derive(Debug, Deserialize)]
pub(crate) struct SendMessageResponse {
    pub(crate) ok: bool,
    pub(crate) result: Option<SentMessage>,
    pub(crate) description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SentMessage {
    pub(crate) message_id: MessageId,
}

#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub(crate) struct MessageId(pub(crate) i64);

#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    /// Telegram responded with the 200 status code, but refused the request.
    /// The raw response body is preserved so that the operator sees exactly
    /// what the API said.
    #[error("Telegram API rejected the request:\n{body}")]
    Rejected { body: String },
}
