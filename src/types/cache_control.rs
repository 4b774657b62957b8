//! Cache marker attached to content blocks for Anthropic prompt caching

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Cache lifetime class requested by a `cache_control` marker.
///
/// Serializes to the wire shape the provider expects, e.g.
/// `{"type": "ephemeral"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CacheControl {
    /// Short-lived prompt cache (the only class this filter emits).
    #[default]
    Ephemeral,
}

impl CacheControl {
    /// Wire name of the cache class.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheControl::Ephemeral => "ephemeral",
        }
    }

    /// JSON value stored in a block's `cache_control` field.
    pub fn to_value(self) -> Value {
        json!({ "type": self.as_str() })
    }
}

impl From<CacheControl> for Value {
    fn from(cc: CacheControl) -> Self {
        cc.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_wire_shape() {
        assert_eq!(CacheControl::Ephemeral.to_value(), json!({"type": "ephemeral"}));
        assert_eq!(
            serde_json::to_value(CacheControl::Ephemeral).unwrap(),
            json!({"type": "ephemeral"})
        );
    }
}
