//! Edge rule: decide, from the path and the credential cookie alone, whether
//! a navigation may reach page rendering.
//!
//! TRADE-OFFS
//! ==========
//! Presence of a non-empty `token` cookie is sufficient. The edge does not
//! validate authenticity or expiry; the remote API remains the authority and
//! the in-page gate handles a rejected credential.

use crate::{PROTECTED_PREFIX, PUBLIC_ENTRY_PATH};

/// Outcome of the edge rule for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDecision {
    /// Let the request through unchanged.
    Pass,
    /// Answer with a redirect to the given location instead.
    Redirect(&'static str),
}

/// `true` for `/dashboard` and every `/dashboard/...` sub-path.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    path.strip_prefix(PROTECTED_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Apply the edge rule. `credential_cookie` is the raw `token` cookie value.
#[must_use]
pub fn edge_decision(path: &str, credential_cookie: Option<&str>) -> EdgeDecision {
    let has_credential = credential_cookie.is_some_and(|value| !value.trim().is_empty());
    if is_protected(path) && !has_credential {
        return EdgeDecision::Redirect(PUBLIC_ENTRY_PATH);
    }
    EdgeDecision::Pass
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod tests;
