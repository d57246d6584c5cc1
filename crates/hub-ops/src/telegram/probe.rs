//! Channel test harness: walk the channel table and attempt one test
//! message per channel, recording the outcome of each attempt.

use super::api::MessageId;
use super::TestChannel;
use crate::prelude::*;
use crate::Result;
use async_trait::async_trait;
use teloxide::prelude::*;

/// The delivery seam of the harness. The production implementation is a
/// real bot, tests substitute their own.
#[async_trait]
pub(crate) trait TestMessageSender {
    async fn send_test_message(&self, channel: &TestChannel, text: &str) -> Result<MessageId>;
}

#[async_trait]
impl TestMessageSender for teloxide::Bot {
    async fn send_test_message(&self, channel: &TestChannel, text: &str) -> Result<MessageId> {
        let message = self.send_message(channel.id.recipient(), text).await?;
        Ok(MessageId(i64::from(message.id.0)))
    }
}

pub(crate) struct ChannelProbe {
    pub(crate) channel: TestChannel,
    pub(crate) outcome: Result<MessageId>,
}

impl ChannelProbe {
    /// Two-line console block for this channel's outcome.
    pub(crate) fn report(&self) -> String {
        match &self.outcome {
            Ok(message_id) => format!(
                "✅ {} - SUCCESS!\n   Message ID: {message_id}",
                self.channel.name
            ),
            Err(err) => format!("❌ {} - FAILED\n   Error: {}", self.channel.name, err.kind()),
        }
    }
}

/// Attempts every channel in the table order. A failing channel is recorded
/// and the walk carries on with the next one, so one revoked admin right
/// doesn't hide the state of the remaining channels.
pub(crate) async fn probe_channels(
    sender: &impl TestMessageSender,
    channels: &[TestChannel],
    text: &str,
) -> Vec<ChannelProbe> {
    let mut probes = Vec::with_capacity(channels.len());

    for channel in channels {
        let outcome = sender.send_test_message(channel, text).await;

        if let Err(err) = &outcome {
            warn!(
                channel = %channel.name,
                err = tracing_err(err),
                "Failed to deliver the test message"
            );
        }

        probes.push(ChannelProbe {
            channel: channel.clone(),
            outcome,
        });
    }

    probes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::ChannelRef;
    use crate::{fatal, Error};
    use expect_test::expect;
    use std::collections::HashSet;

    struct FakeSender {
        unreachable: HashSet<&'static str>,
    }

    #[async_trait]
    impl TestMessageSender for FakeSender {
        async fn send_test_message(&self, channel: &TestChannel, _text: &str) -> Result<MessageId> {
            if self.unreachable.contains(channel.name.as_str()) {
                return Err(fatal!("bot is not a member of {}", channel.name));
            }
            Ok(MessageId(123))
        }
    }

    fn channel_table() -> Vec<TestChannel> {
        ["@TheHubDeals", "@thehubempire", "@hubtest123"]
            .map_collect(|name| TestChannel {
                name: name.to_owned(),
                id: ChannelRef::new(name),
            })
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_walk() {
        let sender = FakeSender {
            unreachable: ["@thehubempire"].into(),
        };

        let probes = probe_channels(&sender, &channel_table(), "ping").await;

        let attempted: Vec<_> = probes
            .iter()
            .map(|probe| probe.channel.name.as_str())
            .collect();
        assert_eq!(attempted, ["@TheHubDeals", "@thehubempire", "@hubtest123"]);

        assert!(probes[0].outcome.is_ok());
        assert!(probes[1].outcome.is_err());
        assert!(probes[2].outcome.is_ok());
    }

    #[tokio::test]
    async fn all_channels_fail_all_are_reported() {
        let sender = FakeSender {
            unreachable: ["@TheHubDeals", "@thehubempire", "@hubtest123"].into(),
        };

        let probes = probe_channels(&sender, &channel_table(), "ping").await;

        assert_eq!(probes.len(), 3);
        assert!(probes.iter().all(|probe| probe.outcome.is_err()));
    }

    #[test]
    fn report_blocks() {
        let success = ChannelProbe {
            channel: TestChannel {
                name: "@TheHubDeals".to_owned(),
                id: ChannelRef::new("-1001846110501"),
            },
            outcome: Ok(MessageId(512)),
        };

        expect![[r#"
            ✅ @TheHubDeals - SUCCESS!
               Message ID: 512"#]]
        .assert_eq(&success.report());

        let failure = ChannelProbe {
            channel: TestChannel {
                name: "@hubtest123".to_owned(),
                id: ChannelRef::new("@hubtest123"),
            },
            outcome: Err(Error::from(crate::ErrorKind::Fatal {
                message: "bot is not a member of @hubtest123".to_owned(),
                source: None,
            })),
        };

        expect![[r#"
            ❌ @hubtest123 - FAILED
               Error: FATAL: bot is not a member of @hubtest123"#]]
        .assert_eq(&failure.report());
    }
}
