//! Wire types shared across Bot API operations
//!
//! Updates are kept structurally opaque: beyond `update_id`, the payload is
//! carried as raw JSON so consumers can pick out the parts they care about
//! without this crate modelling every message schema.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One inbound event from the Bot API, identified by a monotonically
/// increasing integer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// The update's unique identifier; identifiers start from a positive
    /// value and increase sequentially
    pub update_id: i64,

    /// Raw update payload (message, edited message, callback query, ...)
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Update {
    /// The `message` part of the payload, if this update carries one
    pub fn message(&self) -> Option<&Value> {
        self.payload.get("message")
    }
}

/// Basic information about a bot or user account (the `getMe` result)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// Up-to-date information about a chat (the `getChat` result)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// Chat type: "private", "group", "supergroup" or "channel"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Chat target accepted by chat-scoped methods
///
/// Either a numeric chat identifier or a public `@username`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}
