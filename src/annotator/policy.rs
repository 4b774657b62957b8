//! Selection policies deciding which messages receive a cache marker.

use super::markers::mark_message;
use crate::types::{Message, Role};

/// Number of trailing user/assistant messages to mark.
///
/// Marking two rather than one keeps the prefix before the final assistant
/// reply cached when that reply is regenerated.
pub const DIALOG_TAIL_LEN: usize = 2;

/// Mark the last system message, if any.
///
/// Returns the index of the marked message.
pub fn cache_system_prompt(messages: &mut [Message]) -> Option<usize> {
    let idx = messages.iter().rposition(|m| m.role == Role::System)?;
    mark_message(&mut messages[idx]);
    Some(idx)
}

/// Mark the last [`DIALOG_TAIL_LEN`] user/assistant messages.
///
/// Returns the indices of the marked messages in conversation order.
pub fn cache_dialog_tail(messages: &mut [Message]) -> Vec<usize> {
    let mut tail: Vec<usize> = messages
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, m)| m.role.is_dialog())
        .map(|(i, _)| i)
        .take(DIALOG_TAIL_LEN)
        .collect();
    tail.reverse();

    for &i in &tail {
        mark_message(&mut messages[i]);
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_none() {
        let mut messages = vec![Message::user("hi")];
        assert_eq!(cache_system_prompt(&mut messages), None);
        assert!(!messages[0].is_cache_marked());
    }

    #[test]
    fn dialog_tail_skips_other_roles() {
        let mut messages = vec![
            Message::user("q"),
            Message::assistant("calling tool"),
            Message::new("tool", "result"),
        ];
        assert_eq!(cache_dialog_tail(&mut messages), vec![0, 1]);
        assert!(!messages[2].is_cache_marked());
    }
}
