//! Marker primitives: reset, content normalization and placement.

use crate::types::{CacheControl, Message, MessageContent};

/// Strip `cache_control` from every block of every message, regardless of
/// role. Plain text, absent and unrecognized content carry no marker and are
/// left as is.
///
/// Returns the number of markers removed.
pub fn clear_markers(messages: &mut [Message]) -> usize {
    messages
        .iter_mut()
        .filter_map(|m| m.content.as_mut().and_then(MessageContent::blocks_mut))
        .flat_map(|blocks| blocks.iter_mut())
        .map(|block| usize::from(block.clear_cache_control()))
        .sum()
}

/// Mark the last content block of `message` as a cache breakpoint,
/// normalizing plain text into a single text block first.
///
/// Returns `false` when there is no block to mark: an empty block list,
/// absent content, or content that is neither text nor blocks (e.g. `null`
/// on a tool-call turn). Such messages are left untouched.
pub fn mark_message(message: &mut Message) -> bool {
    let last = message
        .content
        .as_mut()
        .and_then(MessageContent::normalize)
        .and_then(|blocks| blocks.last_mut());
    match last {
        Some(block) => {
            block.set_cache_control(CacheControl::Ephemeral);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentBlock;
    use serde_json::json;

    #[test]
    fn mark_plain_text_normalizes() {
        let mut msg = Message::user("hello");
        assert!(mark_message(&mut msg));
        assert_eq!(
            serde_json::to_value(&msg.content).unwrap(),
            json!([{"type": "text", "text": "hello", "cache_control": {"type": "ephemeral"}}])
        );
    }

    #[test]
    fn mark_touches_only_last_block() {
        let mut msg = Message::user(vec![ContentBlock::text("a"), ContentBlock::text("b")]);
        mark_message(&mut msg);
        let blocks = msg.blocks().unwrap();
        assert!(!blocks[0].is_cache_marked());
        assert!(blocks[1].is_cache_marked());
    }

    #[test]
    fn mark_empty_blocks_is_noop() {
        let mut msg = Message::user(MessageContent::Blocks(vec![]));
        assert!(!mark_message(&mut msg));
        assert_eq!(msg.content, Some(MessageContent::Blocks(vec![])));
    }

    #[test]
    fn clear_counts_removed_markers() {
        let marked = ContentBlock::text("x").with_cache_control(CacheControl::Ephemeral);
        let mut messages = vec![
            Message::system(vec![marked.clone(), marked.clone()]),
            Message::user("plain"),
            Message::assistant(vec![ContentBlock::text("y")]),
        ];
        assert_eq!(clear_markers(&mut messages), 2);
        assert_eq!(clear_markers(&mut messages), 0);
        // plain text stays plain
        assert_eq!(messages[1].content, Some(MessageContent::Text("plain".into())));
    }

    #[test]
    fn mark_skips_null_and_absent_content() {
        let mut messages: Vec<Message> = serde_json::from_value(json!([
            {"role": "assistant", "content": null, "tool_calls": [{"id": "c1"}]},
            {"role": "assistant", "tool_calls": [{"id": "c2"}]},
        ]))
        .unwrap();
        assert!(!mark_message(&mut messages[0]));
        assert!(!mark_message(&mut messages[1]));
        assert_eq!(messages[0].content, Some(MessageContent::Other(json!(null))));
        assert_eq!(messages[1].content, None);
    }
}
