mod blog;
mod cmd;
mod config;
mod db;
mod error;
mod http;
mod observability;
mod openrouter;
mod telegram;
mod util;

pub use crate::error::*;
pub use observability::*;

#[allow(unused_imports)]
mod prelude {
    pub(crate) use crate::error::prelude::*;
    pub(crate) use crate::http::prelude::*;
    pub(crate) use crate::observability::logging::prelude::*;
    pub(crate) use crate::util::prelude::*;
}

use clap::Parser;
use cmd::Cmd;

/// Operational scripts for The Hub deals site
#[derive(Parser, Debug)]
enum Args {
    WriteBlog(cmd::WriteBlog),
    AnnounceLaunch(cmd::AnnounceLaunch),
    AnnounceExpansion(cmd::AnnounceExpansion),
    Post(cmd::Post),
    TestChannels(cmd::TestChannels),
    TestBot(cmd::TestBot),
}

pub async fn run() -> Result {
    match Args::parse() {
        Args::WriteBlog(cmd) => cmd.run().await,
        Args::AnnounceLaunch(cmd) => cmd.run().await,
        Args::AnnounceExpansion(cmd) => cmd.run().await,
        Args::Post(cmd) => cmd.run().await,
        Args::TestChannels(cmd) => cmd.run().await,
        Args::TestBot(cmd) => cmd.run().await,
    }
}
