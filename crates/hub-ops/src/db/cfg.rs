use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct Config {
    pub(crate) url: url::Url,

    #[serde(default = "default_database_pool_size")]
    pub(crate) pool_size: u32,
}

fn default_database_pool_size() -> u32 {
    // These scripts run a single query and exit. The hosted Postgres has a
    // tight connection limit shared with the web app, so stay tiny.
    2
}
