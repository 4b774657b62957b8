//! Public types for the claude-cache API.

mod cache_control;
mod message;
mod request;

pub use cache_control::CacheControl;
pub use message::{ContentBlock, Message, MessageContent, Role};
pub use request::{ChatRequest, UserInfo};

/// Deserialize a field that is present in the input, keeping `null` as a
/// value. Paired with `#[serde(default)]`, only an absent key becomes `None`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
