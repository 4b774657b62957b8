//! Core Filter trait

use serde_json::Value;

use crate::types::{ChatRequest, UserInfo};

/// A request/response filter installed in a chat-orchestration host.
///
/// The host calls [`inlet`](Filter::inlet) on every outgoing request and
/// [`outlet`](Filter::outlet) on every response. Implementations hold only
/// immutable configuration, so one instance may serve concurrent requests.
pub trait Filter: Send + Sync {
    /// Pre-send transform. Takes ownership of the body for the duration of
    /// the call and hands it back, possibly mutated.
    fn inlet(&self, body: ChatRequest, user: Option<&UserInfo>) -> ChatRequest;

    /// Post-receive hook. Passes the response through by default.
    fn outlet(&self, body: Value, _user: Option<&UserInfo>) -> Value {
        body
    }

    /// Ordering among installed filters.
    fn priority(&self) -> i64 {
        0
    }
}
