use crate::cmd;
use crate::prelude::*;
use crate::telegram::api;
use crate::{config, http, telegram, Result};
use async_trait::async_trait;
use clap::Parser;

/// Post an ad-hoc message to the configured channel
#[derive(Parser, Debug)]
pub(crate) struct Post {
    /// The message text. Multiple arguments are joined with spaces
    #[clap(required_unless_present = "stdin")]
    message: Vec<String>,

    /// Read the message text from stdin instead of the arguments
    #[clap(long)]
    stdin: bool,
}

#[async_trait]
impl cmd::Cmd for Post {
    async fn run(self) -> Result {
        let cfg: telegram::Config = config::from_env_or_panic("TELEGRAM_");

        let text = if self.stdin {
            std::io::read_to_string(std::io::stdin())
                .fatal_ctx(|| "Failed to read the message from stdin")?
                .trim()
                .to_owned()
        } else {
            self.message.join(" ")
        };

        let client = api::Client::new(cfg.bot_token, http::create_client());

        let opts = api::SendMessageOptions {
            parse_mode: Some(api::ParseMode::Html),
            disable_web_page_preview: Some(false),
        };

        match client.send_message(&cfg.channel_id, &text, opts).await {
            Ok(sent) => {
                println!(
                    "✅ Posted to {} (message_id: {})",
                    cfg.channel_id, sent.message_id
                );
                Ok(())
            }
            Err(err) => {
                eprintln!("❌ Failed to post: {}", err.kind());
                Err(err)
            }
        }
    }
}
