mod announce_expansion;
mod announce_launch;
mod post;
mod test_bot;
mod test_channels;
mod write_blog;

pub(crate) use announce_expansion::*;
pub(crate) use announce_launch::*;
pub(crate) use post::*;
pub(crate) use test_bot::*;
pub(crate) use test_channels::*;
pub(crate) use write_blog::*;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub(crate) trait Cmd {
    async fn run(self) -> Result;
}
