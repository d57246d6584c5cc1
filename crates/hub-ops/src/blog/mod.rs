//! Generates SEO articles for the site blog out of the trending listings.
//!
//! The pipeline is linear: query the listings scraped over the last week,
//! pick one of the three article templates, ask the model to write the post,
//! wrap it into front matter and drop it into the content directory.

mod article;
mod prompt;
mod topic;

pub(crate) use prompt::SITE_URL;
pub(crate) use topic::TopicKind;

use crate::prelude::*;
use crate::{db, err, openrouter, Result};
use chrono::Utc;
use fs_err::tokio as fs;
use serde::Deserialize;
use std::path::PathBuf;
use topic::TopicPolicy;

/// How far back the trending query looks.
const TRENDING_WINDOW_DAYS: i64 = 7;

/// Cap on the number of listings pulled for topic building.
const TRENDING_LIMIT: i64 = 50;

fn default_content_dir() -> PathBuf {
    PathBuf::from("content/blog")
}

#[derive(Deserialize)]
pub(crate) struct Config {
    /// Directory the rendered markdown lands in. A relative path resolves
    /// against the working directory the script is run from.
    #[serde(default = "default_content_dir")]
    pub(crate) content_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum BlogError {
    #[error("no listings were scraped in the last {days} days, nothing to write about")]
    NoTrendingListings { days: i64 },
}

pub(crate) struct BlogWriter {
    db: db::Repo,
    openrouter: openrouter::Client,
    cfg: Config,
}

impl BlogWriter {
    pub(crate) fn new(db: db::Repo, openrouter: openrouter::Client, cfg: Config) -> Self {
        Self {
            db,
            openrouter,
            cfg,
        }
    }

    /// Generates a single article and writes it to the content directory.
    /// Returns the path of the created file.
    ///
    /// When `forced` is `None` the topic template rotates with the calendar
    /// date, so the daily cron covers all three templates over three days.
    pub(crate) async fn write_article(&self, forced: Option<TopicKind>) -> Result<PathBuf> {
        let listings = self
            .db
            .listings
            .trending(chrono::Duration::days(TRENDING_WINDOW_DAYS), TRENDING_LIMIT)
            .await?;

        if listings.is_empty() {
            return Err(err!(BlogError::NoTrendingListings {
                days: TRENDING_WINDOW_DAYS
            }));
        }

        let today = Utc::now().date_naive();
        let kind = forced.unwrap_or_else(|| topic::RotateByDate.pick(today));

        info!(%kind, listings = listings.len(), "Building the article topic");

        let topic = topic::build_topic(kind, listings);

        info!(title = %topic.title, "Generating the article body");

        let body = self
            .openrouter
            .complete(prompt::SYSTEM_PROMPT, &prompt::build_prompt(&topic))
            .with_duration_log("Generated the article body")
            .await?;

        let article = article::render_article(&topic, &body, today);

        fs::create_dir_all(&self.cfg.content_dir).await?;

        let path = self.cfg.content_dir.join(&article.file_name);
        fs::write(&path, article.markdown).await?;

        info!(path = %path.display(), "Saved the article");

        Ok(path)
    }
}
