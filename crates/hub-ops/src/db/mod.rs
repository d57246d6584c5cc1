mod cfg;
mod listing;

use crate::{err_ctx, Result};
use sqlx::postgres::PgPoolOptions;

pub(crate) use cfg::*;
pub(crate) use listing::*;

/// Most likely unrecoverable errors from the database communication layer
#[derive(Debug, thiserror::Error)]
pub(crate) enum DbError {
    #[error("Failed to connect to the database")]
    Connect { source: sqlx::Error },

    #[error("Failed to query the database")]
    Query {
        #[from]
        source: sqlx::Error,
    },
}

pub(crate) struct Repo {
    pub(crate) listings: ListingRepo,
}

pub(crate) async fn init(cfg: Config) -> Result<Repo> {
    // Verify that the connection is working early.
    let pool = PgPoolOptions::new()
        .max_connections(cfg.pool_size)
        .connect(cfg.url.as_str())
        .await
        .map_err(err_ctx!(DbError::Connect))?;

    Ok(Repo {
        listings: ListingRepo::new(pool),
    })
}
