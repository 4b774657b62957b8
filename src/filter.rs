//! The claude-cache filter.

use serde_json::Value;
use tracing::{debug, info, trace, warn};

use crate::Result;
use crate::annotator::{AnnotationSummary, annotate_messages};
use crate::gate::{self, Applicability};
use crate::settings::FilterSettings;
use crate::traits::Filter;
use crate::types::{ChatRequest, UserInfo};

/// Name the filter logs under.
pub const FILTER_NAME: &str = "claude-cache";

/// Adds Anthropic prompt-caching markers to Claude requests.
///
/// ```rust
/// use claude_cache::{ChatRequest, ClaudeCacheFilter, Filter, Message};
///
/// let filter = ClaudeCacheFilter::default();
/// let body = ChatRequest::new(
///     "anthropic.claude-3-5-sonnet",
///     vec![Message::system("You are terse."), Message::user("Hi")],
/// );
/// let body = filter.inlet(body, None);
/// assert!(body.messages().iter().all(|m| m.is_cache_marked()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClaudeCacheFilter {
    settings: FilterSettings,
}

impl ClaudeCacheFilter {
    pub fn new(settings: FilterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// Annotate `body` in place if the gate allows it.
    ///
    /// Returns the annotation summary, or `None` when the body was left
    /// untouched.
    pub fn annotate(
        &self,
        body: &mut ChatRequest,
        user: Option<&UserInfo>,
    ) -> Option<AnnotationSummary> {
        let decision = gate::check_user(user, body.model());
        if !self.log_decision(decision, body.model()) {
            return None;
        }

        Some(self.apply(body))
    }

    /// JSON boundary for hosts that exchange raw bodies.
    ///
    /// The gate runs on the raw value, so a request the filter does not
    /// apply to is returned exactly as received.
    ///
    /// # Errors
    ///
    /// Returns `Json` if an applicable body does not decode into a
    /// [`ChatRequest`] (e.g. a message without a `role`).
    pub fn inlet_json(&self, body: Value, user: Option<&Value>) -> Result<Value> {
        let model = body.get("model").and_then(Value::as_str).unwrap_or("");
        let role = gate::effective_role_json(user);
        if !self.log_decision(gate::check(role, model), model) {
            return Ok(body);
        }

        let mut request: ChatRequest = serde_json::from_value(body)?;
        self.apply(&mut request);
        Ok(serde_json::to_value(request)?)
    }

    /// Response pass-through for raw bodies.
    pub fn outlet_json(&self, body: Value, _user: Option<&Value>) -> Value {
        body
    }

    fn apply(&self, body: &mut ChatRequest) -> AnnotationSummary {
        let summary = annotate_messages(body.messages_mut());
        trace!(
            cleared = summary.cleared,
            marked = ?summary.marked(),
            "placed cache markers"
        );
        self.debug_body(body);
        summary
    }

    fn log_decision(&self, decision: Applicability, model: &str) -> bool {
        match decision {
            Applicability::Applicable => true,
            Applicability::Skipped(reason) => {
                debug!(filter = FILTER_NAME, model, ?reason, "skipping request");
                false
            }
        }
    }

    fn debug_body(&self, body: &ChatRequest) {
        if !self.settings.debug {
            return;
        }
        match serde_json::to_string(body) {
            Ok(json) => info!("[{FILTER_NAME}] body: {json}"),
            Err(e) => warn!(filter = FILTER_NAME, error = %e, "failed to encode body for logging"),
        }
    }
}

impl Filter for ClaudeCacheFilter {
    fn inlet(&self, mut body: ChatRequest, user: Option<&UserInfo>) -> ChatRequest {
        self.annotate(&mut body, user);
        body
    }

    fn priority(&self) -> i64 {
        self.settings.priority
    }
}
