//! Message listener: classify, resolve, format, deliver.

use std::sync::Arc;

use super::message::{IncomingMessage, Reply};
use super::sink::ReplySink;
use crate::links;
use crate::resolver::{ResolverService, render_reply};

/// What happened to one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// Our own message, or no text at all
    Ignored,
    /// No music link in the text
    NotMusic,
    /// A link was found but neither aggregator produced anything usable
    Unresolved,
    /// A reply was handed to the sink
    Replied,
    /// The sink rejected the reply
    DeliveryFailed,
}

/// Listens for music links and replies with cross-platform equivalents
#[derive(Clone)]
pub struct LinkListener {
    resolver: Arc<ResolverService>,
}

impl LinkListener {
    pub fn new(resolver: Arc<ResolverService>) -> Self {
        Self { resolver }
    }

    /// Build the reply for a message without delivering it
    pub async fn prepare_reply(&self, message: &IncomingMessage) -> Result<Reply, HandleOutcome> {
        if message.outgoing {
            return Err(HandleOutcome::Ignored);
        }
        let Some(text) = message.content() else {
            return Err(HandleOutcome::Ignored);
        };
        let Some(link) = links::classify(text) else {
            return Err(HandleOutcome::NotMusic);
        };
        tracing::debug!(
            chat_id = message.chat_id,
            message_id = message.message_id,
            platform = link.platform,
            url = %link.url,
            "music link detected"
        );

        let result = self.resolver.resolve(&link).await;
        match render_reply(&result, &message.attribution()) {
            Some(text) => Ok(Reply::to(message, text)),
            None => {
                tracing::warn!(url = %link.url, "no aggregator could resolve link");
                Err(HandleOutcome::Unresolved)
            }
        }
    }

    /// Handle one message end to end
    pub async fn handle(&self, message: &IncomingMessage, sink: &dyn ReplySink) -> HandleOutcome {
        let reply = match self.prepare_reply(message).await {
            Ok(reply) => reply,
            Err(outcome) => return outcome,
        };

        match sink.deliver(reply).await {
            Ok(()) => {
                tracing::info!(
                    chat_id = message.chat_id,
                    message_id = message.message_id,
                    "sent cross-platform links"
                );
                HandleOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(chat_id = message.chat_id, error = %e, "failed to deliver reply");
                HandleOutcome::DeliveryFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::resolver::AggregatorSource;
    use crate::resolver::traits::mocks::MockAggregator;
    use crate::test_utils::{RecordingSink, mock_message};

    fn odesli_fixture() -> MockAggregator {
        MockAggregator::with_links(
            AggregatorSource::Odesli,
            Some("Song"),
            Some("Artist"),
            Some("https://song.link/s/abc123"),
            &[("Spotify", "https://open.spotify.com/track/abc123")],
        )
    }

    fn songwhip_fixture() -> MockAggregator {
        MockAggregator::with_links(
            AggregatorSource::Songwhip,
            None,
            None,
            Some("https://songwhip.com/artist/song"),
            &[("YouTube Music", "https://music.youtube.com/watch?v=xyz")],
        )
    }

    fn listener(a: MockAggregator, b: MockAggregator) -> LinkListener {
        LinkListener::new(Arc::new(ResolverService::with_aggregators(
            Arc::new(a),
            Arc::new(b),
            Duration::from_secs(2),
        )))
    }

    #[tokio::test]
    async fn test_end_to_end_reply() {
        let sink = RecordingSink::default();
        let message = mock_message("check this out https://open.spotify.com/track/abc123");

        let outcome = listener(odesli_fixture(), songwhip_fixture())
            .handle(&message, &sink)
            .await;

        assert_eq!(outcome, HandleOutcome::Replied);
        let replies = sink.replies();
        assert_eq!(replies.len(), 1);
        let text = &replies[0].text;
        assert!(text.contains("**Song** by **Artist**"));
        let spotify = text.find("https://open.spotify.com/track/abc123").unwrap();
        let youtube = text.find("https://music.youtube.com/watch?v=xyz").unwrap();
        assert!(spotify < youtube);
        assert!(text.contains("[View on Odesli](https://song.link/s/abc123)"));
        assert!(text.contains("[View on Songwhip](https://songwhip.com/artist/song)"));
        assert!(replies[0].disable_web_page_preview);
    }

    #[tokio::test]
    async fn test_non_music_text_makes_no_calls() {
        let (a, b) = (odesli_fixture(), songwhip_fixture());
        let (a_calls, b_calls) = (a.calls(), b.calls());
        let sink = RecordingSink::default();

        let outcome = listener(a, b)
            .handle(&mock_message("see you at https://example.com"), &sink)
            .await;

        assert_eq!(outcome, HandleOutcome::NotMusic);
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
        assert!(sink.replies().is_empty());
    }

    #[tokio::test]
    async fn test_primary_down_uses_secondary_only() {
        let sink = RecordingSink::default();
        let outcome = listener(MockAggregator::failing(AggregatorSource::Odesli), songwhip_fixture())
            .handle(&mock_message("https://open.spotify.com/track/abc123"), &sink)
            .await;

        assert_eq!(outcome, HandleOutcome::Replied);
        let text = &sink.replies()[0].text;
        assert!(text.contains("[Youtube Music](https://music.youtube.com/watch?v=xyz)"));
        assert!(text.contains("View on Songwhip"));
        assert!(!text.contains("View on Odesli"));
    }

    #[tokio::test]
    async fn test_both_down_sends_nothing() {
        let sink = RecordingSink::default();
        let outcome = listener(
            MockAggregator::failing(AggregatorSource::Odesli),
            MockAggregator::failing(AggregatorSource::Songwhip),
        )
        .handle(&mock_message("https://open.spotify.com/track/abc123"), &sink)
        .await;

        assert_eq!(outcome, HandleOutcome::Unresolved);
        assert_eq!(sink.delivery_attempts(), 0);
    }

    #[tokio::test]
    async fn test_outgoing_messages_ignored() {
        let sink = RecordingSink::default();
        let mut message = mock_message("https://open.spotify.com/track/abc123");
        message.outgoing = true;

        let outcome = listener(odesli_fixture(), songwhip_fixture())
            .handle(&message, &sink)
            .await;
        assert_eq!(outcome, HandleOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_caption_is_classified() {
        let sink = RecordingSink::default();
        let mut message = mock_message("");
        message.text = None;
        message.caption = Some("cover art https://open.spotify.com/album/xyz".to_string());

        let outcome = listener(odesli_fixture(), songwhip_fixture())
            .handle(&message, &sink)
            .await;
        assert_eq!(outcome, HandleOutcome::Replied);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported() {
        let sink = RecordingSink::rejecting();
        let outcome = listener(odesli_fixture(), songwhip_fixture())
            .handle(&mock_message("https://open.spotify.com/track/abc123"), &sink)
            .await;

        assert_eq!(outcome, HandleOutcome::DeliveryFailed);
        assert_eq!(sink.delivery_attempts(), 1);
    }
}
