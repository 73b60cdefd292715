//! Reply delivery seam.
//!
//! The chat client that actually sends messages lives outside this crate;
//! it implements [`ReplySink`]. [`JsonLinesSink`] is the one shipped here,
//! used by `tunebridge listen`.

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use super::message::Reply;

/// Errors delivering a reply
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write reply: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can deliver replies to a chat
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn deliver(&self, reply: Reply) -> Result<(), DeliveryError>;
}

/// Writes each reply as one JSON line
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: AsyncWrite + Unpin + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ReplySink for JsonLinesSink<W> {
    async fn deliver(&self, reply: Reply) -> Result<(), DeliveryError> {
        let mut line = serde_json::to_vec(&reply)?;
        line.push(b'\n');

        // Hold the lock for the whole line so concurrent replies never interleave
        let mut writer = self.writer.lock().await;
        writer.write_all(&line).await?;
        writer.flush().await?;
        Ok(())
    }
}
