use crate::cmd;
use crate::{config, telegram, Result};
use async_trait::async_trait;
use clap::Parser;
use teloxide::prelude::*;

const TEST_MESSAGE: &str = "🔥 THE EMPIRE IS AWAKE! 🔥\n\
    \n\
    Your agent army just came online:\n\
    ✅ Instagram Bot - Posting deals\n\
    ✅ Telegram Bot - Online now  \n\
    ✅ Deal Finder - Scanning\n\
    ✅ Health Monitor - Watching\n\
    \n\
    First automated post from The Hub! 🚀";

/// Send a single smoke test message through the bot to the main channel
#[derive(Parser, Debug)]
pub(crate) struct TestBot;

#[async_trait]
impl cmd::Cmd for TestBot {
    async fn run(self) -> Result {
        let cfg: telegram::Config = config::from_env_or_panic("TELEGRAM_");
        let bot = teloxide::Bot::new(cfg.bot_token);

        println!("🤖 Testing Telegram Bot...");
        println!("📢 Posting to channel: {}\n", cfg.channel_id);

        let sent = bot
            .send_message(cfg.channel_id.recipient(), TEST_MESSAGE)
            .await;

        match sent {
            Ok(message) => {
                println!("✅ Message posted successfully!");
                println!("   Message ID: {}", message.id.0);
                println!("\n📱 Check your channel now!");
            }
            Err(err) => eprintln!("❌ Error: {err}"),
        }

        Ok(())
    }
}
