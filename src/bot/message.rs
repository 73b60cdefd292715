//! Inbound messages and outbound replies.

use serde::{Deserialize, Serialize};

use crate::resolver::Attribution;

/// Who sent a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: Option<i64>,
    pub name: String,
}

/// A chat message as handed over by the dispatcher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub message_id: i64,
    /// The message this one replies to, if any
    pub reply_to_message_id: Option<i64>,
    pub sender: Option<Sender>,
    pub text: Option<String>,
    /// Media caption, used when there is no text
    pub caption: Option<String>,
    /// Sent by the bot itself
    pub outgoing: bool,
}

impl IncomingMessage {
    /// Text content, falling back to the caption
    pub fn content(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.caption.as_deref())
    }

    /// Message the reply should thread under
    pub fn reply_target(&self) -> i64 {
        self.reply_to_message_id.unwrap_or(self.message_id)
    }

    /// Attribution for the reply header
    pub fn attribution(&self) -> Attribution {
        match &self.sender {
            Some(sender) => Attribution::new(sender.id, sender.name.clone()),
            None => Attribution::new(None, "someone"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    Markdown,
}

/// A reply ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub chat_id: i64,
    pub reply_to_message_id: i64,
    pub text: String,
    pub parse_mode: ParseMode,
    pub disable_web_page_preview: bool,
}

impl Reply {
    /// Markdown reply to `message` with link previews suppressed
    pub fn to(message: &IncomingMessage, text: String) -> Self {
        Self {
            chat_id: message.chat_id,
            reply_to_message_id: message.reply_target(),
            text,
            parse_mode: ParseMode::Markdown,
            disable_web_page_preview: true,
        }
    }
}
