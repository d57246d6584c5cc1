//! Telegram delivery: channel configuration, the raw Bot API client used
//! by the announcement scripts, and the channel test harness.
pub(crate) mod api;
pub(crate) mod probe;

use crate::prelude::*;
use serde::Deserialize;
use serde_with::serde_as;
use teloxide::types::{ChatId, Recipient};

/// A Telegram destination, either a numeric chat id like `-1001846110501`
/// or a public `@handle`.
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub(crate) struct ChannelRef(String);

impl ChannelRef {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Wire form for the raw Bot API; `chat_id` accepts both shapes as a string.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn recipient(&self) -> Recipient {
        match self.0.parse::<i64>() {
            Ok(id) => Recipient::Id(ChatId(id)),
            Err(_) => Recipient::ChannelUsername(self.0.clone()),
        }
    }
}

/// One row of the channel table the test harness walks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct TestChannel {
    pub(crate) name: String,
    pub(crate) id: ChannelRef,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub(crate) struct Config {
    pub(crate) bot_token: String,

    /// The public channel all announcements go to.
    pub(crate) channel_id: ChannelRef,

    /// Internal operations channel. Only the expansion announcement needs
    /// it, so it stays optional.
    #[serde(default)]
    pub(crate) empire_channel_id: Option<ChannelRef>,

    /// The channel table the test harness walks, as a JSON array like
    /// `[{"name": "@TheHubDeals", "id": "-1001846110501"}]`.
    /// Defaults to the channels the bot is known to admin.
    #[serde_as(as = "serde_with::json::JsonString")]
    #[serde(default = "default_test_channels")]
    pub(crate) test_channels: Vec<TestChannel>,
}

fn default_test_channels() -> Vec<TestChannel> {
    let channels = [
        ("@TheHubDeals", "-1001846110501"),
        ("@thehubempire", "-1003884685341"),
        ("@hubtest123", "-1003850293697"),
    ];

    channels.map_collect(|(name, id)| TestChannel {
        name: name.to_owned(),
        id: ChannelRef::new(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_discriminates_ids_from_handles() {
        assert_eq!(
            ChannelRef::new("-1001846110501").recipient(),
            Recipient::Id(ChatId(-1001846110501))
        );
        assert_eq!(
            ChannelRef::new("@TheHubDeals").recipient(),
            Recipient::ChannelUsername("@TheHubDeals".to_owned())
        );
    }

    #[test]
    fn test_channel_table_parses_from_json() {
        let channels: Vec<TestChannel> = serde_json::from_str(
            r#"[{"name": "@TheHubDeals", "id": "-1001846110501"}, {"name": "@hubtest123", "id": "@hubtest123"}]"#,
        )
        .unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "@TheHubDeals");
        assert_eq!(channels[0].id, ChannelRef::new("-1001846110501"));
    }
}
