use crate::cmd;
use crate::telegram::probe;
use crate::{config, telegram, Result};
use async_trait::async_trait;
use clap::Parser;

const TEST_MESSAGE: &str = "🔥 Test post from The Hub Bot!";

/// Send a test message to every channel in the channel table and report
/// the outcome per channel
#[derive(Parser, Debug)]
pub(crate) struct TestChannels;

#[async_trait]
impl cmd::Cmd for TestChannels {
    async fn run(self) -> Result {
        let cfg: telegram::Config = config::from_env_or_panic("TELEGRAM_");
        let bot = teloxide::Bot::new(cfg.bot_token);

        println!("🔍 Testing all channels...\n");

        let probes = probe::probe_channels(&bot, &cfg.test_channels, TEST_MESSAGE).await;

        for probe in probes {
            println!("{}\n", probe.report());
        }

        Ok(())
    }
}
