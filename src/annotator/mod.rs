//! Request annotator.
//!
//! Places Anthropic prompt-caching breakpoints on a conversation:
//!
//! 1. every existing `cache_control` marker is removed, so markers left by a
//!    previous send never survive at a stale position;
//! 2. the last system message is marked ([`policy::cache_system_prompt`]);
//! 3. the last two user/assistant messages are marked
//!    ([`policy::cache_dialog_tail`]).
//!
//! A marked message always has its marker on the last content block only.

pub mod markers;
pub mod policy;

pub use markers::{clear_markers, mark_message};
pub use policy::{DIALOG_TAIL_LEN, cache_dialog_tail, cache_system_prompt};

use crate::types::Message;

/// What [`annotate_messages`] did to a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// Markers removed during reset.
    pub cleared: usize,
    /// Index of the marked system message.
    pub system: Option<usize>,
    /// Indices of the marked dialog messages, in conversation order.
    pub dialog: Vec<usize>,
}

impl AnnotationSummary {
    /// All marked message indices in conversation order.
    pub fn marked(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self
            .system
            .into_iter()
            .chain(self.dialog.iter().copied())
            .collect();
        all.sort_unstable();
        all
    }
}

/// Reset and re-place cache markers on `messages` in place.
pub fn annotate_messages(messages: &mut [Message]) -> AnnotationSummary {
    let cleared = clear_markers(messages);
    let system = cache_system_prompt(messages);
    let dialog = cache_dialog_tail(messages);
    AnnotationSummary {
        cleared,
        system,
        dialog,
    }
}
