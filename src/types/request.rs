//! Request and user descriptors handed over by the host

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::message::Message;

/// Outgoing chat-completion request body.
///
/// Only `model` and `messages` are interpreted. Absent fields stay absent
/// when the body is serialized again, and every other field is carried in
/// `extra` as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: Some(model.into()),
            messages: Some(messages),
            extra: Map::new(),
        }
    }

    /// Model identifier, or `""` when absent
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }

    /// The conversation, empty when `messages` is absent
    pub fn messages(&self) -> &[Message] {
        self.messages.as_deref().unwrap_or(&[])
    }

    /// Mutable conversation; an absent `messages` field stays absent.
    pub fn messages_mut(&mut self) -> &mut [Message] {
        self.messages.as_deref_mut().unwrap_or(&mut [])
    }
}

/// User descriptor supplied by the host alongside a request.
///
/// `role` keeps whatever JSON value the host sent. Only an absent key is
/// `None`; a `null` role is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(
        default,
        deserialize_with = "super::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserInfo {
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(Value::String(role.into())),
            extra: Map::new(),
        }
    }
}
