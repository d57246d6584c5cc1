use crate::cmd;
use crate::telegram::api;
use crate::{config, http, telegram, Result};
use async_trait::async_trait;
use clap::Parser;

const LAUNCH_MESSAGE: &str = "🚀 The Hub is now LIVE!\n\
    \n\
    Check it out: https://the-hub-psi.vercel.app\n\
    \n\
    Track deals on watches, sneakers, cars & more.\n\
    \n\
    Features:\n\
    ✅ Real-time price alerts\n\
    ✅ Deal scoring\n\
    ✅ Multi-marketplace search\n\
    ✅ 100% free tier\n\
    \n\
    Let us know what you think! 👇";

/// Post the launch announcement to the main channel
#[derive(Parser, Debug)]
pub(crate) struct AnnounceLaunch;

#[async_trait]
impl cmd::Cmd for AnnounceLaunch {
    async fn run(self) -> Result {
        let cfg: telegram::Config = config::from_env_or_panic("TELEGRAM_");
        let client = api::Client::new(cfg.bot_token, http::create_client());

        let sent = client
            .send_message(
                &cfg.channel_id,
                LAUNCH_MESSAGE,
                api::SendMessageOptions::default(),
            )
            .await;

        match sent {
            Ok(_) => {
                println!("✅ Posted launch announcement to Telegram!");
                Ok(())
            }
            Err(err) => {
                println!("{}", err.kind());
                Err(err)
            }
        }
    }
}
