use super::DbError;
use crate::prelude::*;
use crate::Result;
use chrono::prelude::*;

/// A row of the web app's `watch_listings` table. The scrapers in the main
/// application own and write this table; these scripts only read it, so the
/// nullable columns stay [`Option`] instead of getting defaults here.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct WatchListing {
    pub(crate) title: String,
    pub(crate) brand: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) price: Option<f64>,
    pub(crate) condition: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) deal_score: Option<f64>,
    pub(crate) scraped_at: DateTime<Utc>,
}

pub(crate) struct ListingRepo {
    pool: sqlx::PgPool,
}

impl ListingRepo {
    pub(crate) fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Listings scraped within `window` of now, best deal scores first.
    pub(crate) async fn trending(
        &self,
        window: chrono::Duration,
        limit: i64,
    ) -> Result<Vec<WatchListing>> {
        let cutoff = Utc::now() - window;

        let listings = sqlx::query_as::<_, WatchListing>(
            "SELECT title, brand, model, price::float8 AS price, condition, \
             source, deal_score::float8 AS deal_score, scraped_at \
             FROM watch_listings \
             WHERE scraped_at >= $1 \
             ORDER BY deal_score DESC \
             LIMIT $2",
        )
        .bind(cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        debug!(listings = listings.len(), %cutoff, "Fetched trending listings");

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test(tokio::test)]
    #[ignore]
    async fn manual_sandbox() {
        let _ = dotenvy::dotenv();

        let repo = crate::db::init(crate::config::from_env_or_panic("DATABASE_"))
            .await
            .unwrap();

        let listings = repo
            .listings
            .trending(chrono::Duration::days(7), 50)
            .await
            .unwrap();

        eprintln!("{listings:#?}");
    }
}
