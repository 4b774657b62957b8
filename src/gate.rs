//! Applicability gate.
//!
//! Cache markers are Anthropic-specific wire fields, so the annotator only
//! runs for Claude models and for users allowed to use the filter. The
//! decision is made fresh on every call.

use serde_json::Value;

use crate::types::UserInfo;

/// Model identifier prefix of Anthropic Claude models.
pub const CLAUDE_MODEL_PREFIX: &str = "anthropic.claude";

/// Role assumed when the host sends no user, or a user without a role.
///
/// This is fail-open: an anonymous request is treated as an admin one.
pub const DEFAULT_USER_ROLE: &str = "admin";

/// User roles the filter applies to.
pub const ALLOWED_ROLES: &[&str] = &["user", "admin"];

/// Why a request was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    RoleNotAllowed,
    UnsupportedModel,
}

/// Outcome of the gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Applicable,
    Skipped(SkipReason),
}

impl Applicability {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Applicability::Applicable)
    }
}

/// Resolve the role from the raw `role` field of a user descriptor.
///
/// An absent field (`None`) falls back to [`DEFAULT_USER_ROLE`]. A field
/// that is present but not a string (e.g. `null`) resolves to `None` and
/// fails the role check.
pub fn resolve_role(raw: Option<&Value>) -> Option<&str> {
    match raw {
        None => Some(DEFAULT_USER_ROLE),
        Some(value) => value.as_str(),
    }
}

/// Role the gate uses for `user`; a missing user counts as an absent role.
pub fn effective_role(user: Option<&UserInfo>) -> Option<&str> {
    resolve_role(user.and_then(|u| u.role.as_ref()))
}

/// Role the gate uses for a raw JSON user descriptor.
pub fn effective_role_json(user: Option<&Value>) -> Option<&str> {
    resolve_role(user.and_then(|u| u.get("role")))
}

/// Evaluate the gate from a resolved role and model identifier.
///
/// `role` is `None` when the descriptor carried no usable role.
pub fn check(role: Option<&str>, model: &str) -> Applicability {
    if !role.is_some_and(|role| ALLOWED_ROLES.contains(&role)) {
        return Applicability::Skipped(SkipReason::RoleNotAllowed);
    }
    if !model.starts_with(CLAUDE_MODEL_PREFIX) {
        return Applicability::Skipped(SkipReason::UnsupportedModel);
    }
    Applicability::Applicable
}

/// Evaluate the gate for a typed user descriptor.
pub fn check_user(user: Option<&UserInfo>, model: &str) -> Applicability {
    check(effective_role(user), model)
}
