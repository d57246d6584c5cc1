//! OpenRouter chat completions client.
//!
//! API docs: <https://openrouter.ai/docs>
mod model;

use crate::prelude::*;
use crate::{err, http, util, Result};
use model::*;
use serde::Deserialize;

util::url::def!(openrouter_api, "https://openrouter.ai/api/v1");

/// Keep some creative liberty, but not enough to derail the article
/// structure requested in the prompt.
const TEMPERATURE: f32 = 0.7;

/// Enough for an 800 word article with headings.
const MAX_TOKENS: u32 = 2000;

#[derive(Deserialize, Clone)]
pub(crate) struct Config {
    pub(crate) api_key: String,

    #[serde(default = "default_model")]
    pub(crate) model: String,
}

fn default_model() -> String {
    "openai/gpt-4o-mini".to_owned()
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum OpenRouterError {
    #[error("The model returned no completion content")]
    EmptyCompletion,
}

pub(crate) struct Client {
    http: http::Client,
    cfg: Config,
}

impl Client {
    pub(crate) fn new(cfg: Config, http: http::Client) -> Self {
        Self { http, cfg }
    }

    /// Single non-streaming completion round trip. Returns the assistant
    /// message text.
    pub(crate) async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.cfg.model,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system,
                },
                ChatMessage {
                    role: Role::User,
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response: ChatCompletionResponse = self
            .http
            .post(openrouter_api(["chat", "completions"]))
            .bearer_auth(&self.cfg.api_key)
            // OpenRouter attributes the traffic to the app via these two
            .header("HTTP-Referer", crate::blog::SITE_URL)
            .header("X-Title", "The Hub Deals Blog")
            .send_and_read_json(request)
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty());

        match content {
            Some(content) => Ok(content),
            None => Err(err!(OpenRouterError::EmptyCompletion)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test(tokio::test)]
    #[ignore]
    async fn manual_sandbox() {
        let _ = dotenvy::dotenv();

        let cfg: Config = crate::config::from_env_or_panic("OPENROUTER_");

        let client = Client::new(cfg, crate::http::create_client());

        let content = client
            .complete("You are a terse assistant.", "Say hi.")
            .await
            .unwrap();

        eprintln!("{content}");
    }
}
