//! claude-cache - prompt-caching filter for Anthropic Claude requests
//!
//! This crate annotates outgoing chat-completion request bodies with
//! `cache_control` markers so Anthropic's prompt caching engages for the
//! repeated prefix of a conversation: the system prompt and the last two
//! user/assistant turns. Markers left on earlier positions are removed on
//! every call, and requests for non-Claude models pass through unmodified.
//!
//! # Example
//!
//! ```rust
//! use claude_cache::{ClaudeCacheFilter, FilterSettings};
//! use serde_json::json;
//!
//! fn main() -> claude_cache::Result<()> {
//!     let filter = ClaudeCacheFilter::new(FilterSettings::default());
//!
//!     let body = filter.inlet_json(
//!         json!({
//!             "model": "anthropic.claude-3-5-sonnet",
//!             "messages": [
//!                 {"role": "system", "content": "You are a helpful assistant."},
//!                 {"role": "user", "content": "What is the capital of France?"},
//!             ],
//!         }),
//!         Some(&json!({"role": "user"})),
//!     )?;
//!
//!     assert_eq!(
//!         body["messages"][1]["content"][0]["cache_control"],
//!         json!({"type": "ephemeral"})
//!     );
//!     Ok(())
//! }
//! ```

pub mod annotator;
pub mod error;
pub mod filter;
pub mod gate;
pub mod settings;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use annotator::{AnnotationSummary, annotate_messages};
pub use error::{ClaudeCacheError, Result};
pub use filter::{ClaudeCacheFilter, FILTER_NAME};
pub use gate::{Applicability, SkipReason};
pub use settings::FilterSettings;
pub use traits::Filter;

// Re-export all types
pub use types::{
    CacheControl, ChatRequest, ContentBlock, Message, MessageContent, Role, UserInfo,
};
