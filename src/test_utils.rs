//! Test utilities and fixtures for tunebridge tests.
//!
//! Canned aggregator payloads, a message factory, and a [`ReplySink`] that
//! records what it was asked to deliver.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{RecordingSink, mock_message};
//!
//! let sink = RecordingSink::default();
//! listener.handle(&mock_message("https://open.spotify.com/track/1"), &sink).await;
//! assert_eq!(sink.replies().len(), 1);
//! ```

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::bot::{DeliveryError, IncomingMessage, Reply, ReplySink, Sender};

/// Odesli `links` response for a Spotify track
pub const ODESLI_RESPONSE: &str = r#"{
    "entityUniqueId": "SPOTIFY_SONG::abc123",
    "userCountry": "US",
    "pageUrl": "https://song.link/s/abc123",
    "entitiesByUniqueId": {
        "SPOTIFY_SONG::abc123": {
            "id": "abc123",
            "type": "song",
            "title": "Song",
            "artistName": "Artist",
            "apiProvider": "spotify"
        },
        "ITUNES_SONG::555": {
            "id": "555",
            "type": "song",
            "title": "Song (Apple edit)",
            "artistName": "Artist",
            "apiProvider": "itunes"
        }
    },
    "linksByPlatform": {
        "spotify": {
            "url": "https://open.spotify.com/track/abc123",
            "entityUniqueId": "SPOTIFY_SONG::abc123"
        },
        "appleMusic": {
            "url": "https://music.apple.com/us/album/song/555?i=555",
            "entityUniqueId": "ITUNES_SONG::555"
        }
    }
}"#;

/// Songwhip response for the same track
pub const SONGWHIP_RESPONSE: &str = r#"{
    "type": "track",
    "name": "Song",
    "url": "https://songwhip.com/artist/song",
    "artists": [{"name": "Artist"}],
    "links": {
        "youtubeMusic": [
            {"link": "https://music.youtube.com/watch?v=xyz", "countries": ["US"]}
        ]
    }
}"#;

/// A message from "Alice" (id 42) in chat 100
pub fn mock_message(text: &str) -> IncomingMessage {
    IncomingMessage {
        chat_id: 100,
        message_id: 1,
        reply_to_message_id: None,
        sender: Some(Sender {
            id: Some(42),
            name: "Alice".to_string(),
        }),
        text: Some(text.to_string()),
        caption: None,
        outgoing: false,
    }
}

/// Sink that records deliveries, optionally rejecting them
#[derive(Default)]
pub struct RecordingSink {
    replies: Mutex<Vec<Reply>>,
    attempts: AtomicUsize,
    reject: bool,
}

impl RecordingSink {
    /// A sink whose every delivery fails
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    /// Replies delivered so far
    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    /// Number of times `deliver` was called, successful or not
    pub fn delivery_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn deliver(&self, reply: Reply) -> Result<(), DeliveryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            return Err(DeliveryError::Io(std::io::Error::other("chat not found")));
        }
        self.replies.lock().unwrap().push(reply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid_json() {
        serde_json::from_str::<serde_json::Value>(ODESLI_RESPONSE).unwrap();
        serde_json::from_str::<serde_json::Value>(SONGWHIP_RESPONSE).unwrap();
    }

    #[test]
    fn test_mock_message_defaults() {
        let message = mock_message("hi");
        assert_eq!(message.content(), Some("hi"));
        assert_eq!(message.attribution().user_id, Some(42));
    }

    #[tokio::test]
    async fn test_recording_sink_rejects() {
        let sink = RecordingSink::rejecting();
        let reply = Reply::to(&mock_message("x"), "y".to_string());
        assert!(sink.deliver(reply).await.is_err());
        assert_eq!(sink.delivery_attempts(), 1);
        assert!(sink.replies().is_empty());
    }
}
