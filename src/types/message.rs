//! Message types for chat conversations

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::cache_control::CacheControl;

/// Role of a message participant
///
/// Roles other than `system`, `user` and `assistant` (e.g. `tool`) are kept
/// verbatim so they round-trip through the filter unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    System,
    User,
    Assistant,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(role) => role,
        }
    }

    /// Whether this role takes part in the user/assistant dialog.
    pub fn is_dialog(&self) -> bool {
        matches!(self, Role::User | Role::Assistant)
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(role),
        }
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Role::from(role.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

/// One element of a message's content sequence.
///
/// Only `cache_control` is given a name; `type` and every other
/// provider-specific field are carried in `extra` untouched, whatever their
/// JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<Value>,
}

impl ContentBlock {
    /// Create a `{"type": "text", "text": ...}` block
    pub fn text(text: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("type".into(), Value::String("text".into()));
        extra.insert("text".into(), Value::String(text.into()));
        Self {
            extra,
            cache_control: None,
        }
    }

    /// Block `type`, if present and a string
    pub fn kind(&self) -> Option<&str> {
        self.extra.get("type").and_then(Value::as_str)
    }

    /// Text of a text block, if any
    pub fn as_text(&self) -> Option<&str> {
        self.extra.get("text").and_then(Value::as_str)
    }

    pub fn is_cache_marked(&self) -> bool {
        self.cache_control.is_some()
    }

    pub fn set_cache_control(&mut self, cc: CacheControl) {
        self.cache_control = Some(cc.to_value());
    }

    /// Remove the marker, returning whether one was present.
    pub fn clear_cache_control(&mut self) -> bool {
        self.cache_control.take().is_some()
    }

    /// Set a cache control directive (builder style)
    #[must_use]
    pub fn with_cache_control(mut self, cc: CacheControl) -> Self {
        self.set_cache_control(cc);
        self
    }
}

/// Message content: a plain text span or an ordered list of blocks
///
/// Anything else (`null` on tool-call turns, arrays of non-objects) is kept
/// as `Other` and never carries a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl MessageContent {
    /// Get the text content, if this is a plain text span
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(s) => Some(s),
            MessageContent::Blocks(_) | MessageContent::Other(_) => None,
        }
    }

    /// Get the blocks, if content is already in block form
    pub fn blocks(&self) -> Option<&[ContentBlock]> {
        match self {
            MessageContent::Blocks(blocks) => Some(blocks),
            MessageContent::Text(_) | MessageContent::Other(_) => None,
        }
    }

    /// Mutable access to the blocks without normalizing plain text.
    pub fn blocks_mut(&mut self) -> Option<&mut Vec<ContentBlock>> {
        match self {
            MessageContent::Blocks(blocks) => Some(blocks),
            MessageContent::Text(_) | MessageContent::Other(_) => None,
        }
    }

    /// Convert plain text into a single text block, then return the blocks.
    ///
    /// `Other` content is left as is and yields `None`.
    pub fn normalize(&mut self) -> Option<&mut Vec<ContentBlock>> {
        if let MessageContent::Text(text) = self {
            let block = ContentBlock::text(std::mem::take(text));
            *self = MessageContent::Blocks(vec![block]);
        }
        self.blocks_mut()
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<Vec<ContentBlock>> for MessageContent {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        MessageContent::Blocks(blocks)
    }
}

/// A chat message
///
/// Fields other than `role` and `content` (`name`, `tool_calls`, ...) are
/// preserved in `extra`. An absent `content` stays absent; a `null` one is
/// kept as [`MessageContent::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(
        default,
        deserialize_with = "super::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<MessageContent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Create a message with any role and content
    pub fn new(role: impl Into<Role>, content: impl Into<MessageContent>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
            extra: Map::new(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Content blocks, if content is present and in block form
    pub fn blocks(&self) -> Option<&[ContentBlock]> {
        self.content.as_ref().and_then(MessageContent::blocks)
    }

    /// Whether any block of this message carries a cache marker
    pub fn is_cache_marked(&self) -> bool {
        self.blocks().is_some_and(|blocks| blocks.iter().any(ContentBlock::is_cache_marked))
    }
}
