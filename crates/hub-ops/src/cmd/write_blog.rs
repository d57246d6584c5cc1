use crate::cmd;
use crate::{blog, config, db, http, openrouter, Result};
use async_trait::async_trait;
use clap::Parser;

/// Generate an SEO blog post from the trending listings and save it into
/// the content directory
#[derive(Parser, Debug)]
pub(crate) struct WriteBlog {
    /// Force the topic template instead of rotating it by date
    #[clap(long, value_enum)]
    topic: Option<blog::TopicKind>,
}

#[async_trait]
impl cmd::Cmd for WriteBlog {
    async fn run(self) -> Result {
        let db = db::init(config::from_env_or_panic("DATABASE_")).await?;
        let openrouter = openrouter::Client::new(
            config::from_env_or_panic("OPENROUTER_"),
            http::create_client(),
        );

        let writer = blog::BlogWriter::new(db, openrouter, config::from_env_or_panic("BLOG_"));

        let path = writer.write_article(self.topic).await?;

        println!("✅ Blog post saved: {}", path.display());

        Ok(())
    }
}
