//! Chat wire and display types for Relaychat.
//!
//! The relay is single-turn: one `ChatRequest` in, one `ChatResponse` out.
//! `ChatMessage` models a displayed message on the client side; it carries
//! no session or persistence metadata.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who authored a displayed chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "bot" => Ok(MessageRole::Bot),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single displayed message.
///
/// User messages are immutable once displayed; a bot message's displayed
/// content grows progressively while the typing reveal runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
}

impl ChatMessage {
    /// A message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    /// A message authored by the bot.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            text: text.into(),
        }
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The raw user message to forward upstream.
    pub message: String,
}

/// Response body for `POST /chat`.
///
/// Returned on success and on failure alike; a failure carries a
/// human-readable warning-prefixed `reply` rather than an error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_display_round_trip() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(MessageRole::Bot.to_string(), "bot");
        assert_eq!("bot".parse::<MessageRole>().unwrap(), MessageRole::Bot);
        assert!("assistant".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_chat_request_deserialize() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
        assert_eq!(req.message, "hello");
    }

    #[test]
    fn test_chat_response_serialize() {
        let resp = ChatResponse {
            reply: "Hi there!".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"reply":"Hi there!"}"#);
    }

    #[test]
    fn test_chat_message_constructors() {
        let msg = ChatMessage::user("hi");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.text, "hi");
        assert_eq!(ChatMessage::bot("yo").role, MessageRole::Bot);
    }
}
