use crate::cmd;
use crate::prelude::*;
use crate::telegram::api;
use crate::{config, http, telegram, Result};
use async_trait::async_trait;
use clap::Parser;

const EXPANSION_MESSAGE: &str = r#"🚀 **WORKFORCE EXPANSION COMPLETE** 🚀

**Agent Count:** 15 → 20 ✅

**🆕 NEW AGENTS DEPLOYED:**

💰 **Sterling** - Revenue Optimizer
  • Track MRR, ARR, pricing
  • A/B test strategies
  • Revenue forecasting

📈 **Scout** - Sales & Partnerships
  • Influencer outreach
  • Partnership development
  • Business growth

🔬 **Sentinel** - Quality Assurance
  • Daily feature testing
  • Bug detection
  • Uptime monitoring

🕵️ **Intel** - Competitive Intelligence
  • Monitor competitors 24/7
  • Price comparisons
  • Market trends

📧 **Mercury** - Email Marketing
  • Newsletter automation
  • Drip campaigns
  • A/B testing

**Total Active Agents:** 20/20 ✅
**Mission:** 24/7/365 Operations
**Status:** All systems operational

Built by: Forge (Backend Dev)
Deployed by: Jay (Co-CEO)
Approved by: Syd (Co-CEO)

The empire grows stronger. 🔥"#;

/// Post the workforce expansion announcement to the empire channel
#[derive(Parser, Debug)]
pub(crate) struct AnnounceExpansion;

#[async_trait]
impl cmd::Cmd for AnnounceExpansion {
    async fn run(self) -> Result {
        let cfg: telegram::Config = config::from_env_or_panic("TELEGRAM_");

        let channel = cfg
            .empire_channel_id
            .fatal_ctx(|| "TELEGRAM_EMPIRE_CHANNEL_ID is not set")?;

        let client = api::Client::new(cfg.bot_token, http::create_client());

        println!("📢 Posting workforce expansion to {channel}...\n");

        let opts = api::SendMessageOptions {
            parse_mode: Some(api::ParseMode::Markdown),
            ..Default::default()
        };

        match client.send_message(&channel, EXPANSION_MESSAGE, opts).await {
            Ok(sent) => {
                println!("✅ Announcement posted!");
                println!("   Message ID: {}", sent.message_id);
                println!("\n🔥 WORKFORCE AT FULL CAPACITY!");
                Ok(())
            }
            Err(err) => {
                eprintln!("❌ Error: {}", err.kind());
                Err(err)
            }
        }
    }
}
