//! In-page rule applied when a protected view mounts.
//!
//! ARCHITECTURE
//! ============
//! `mount` decides from the store alone. `guard_fetch` wraps the view's first
//! data load: it never calls the fetch without a credential, hands the fetch
//! the exact `Authorization` value, and classifies failures. Only an explicit
//! authorization-denied response ends the session; every other failure is
//! reported inline so the view can offer a retry without losing input.

use std::future::Future;

use crate::PUBLIC_ENTRY_PATH;
use crate::error::ApiError;
use crate::store::CredentialStore;

/// Result of mounting a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount {
    /// No credential: navigate away and skip data loading.
    Redirect(&'static str),
    /// Credential present: use `authorization` on data requests.
    Proceed { authorization: String },
}

/// Result of a guarded data load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// Navigate to the given location; the session is gone.
    Redirect(&'static str),
    Loaded(T),
    /// Show `message` inline with a retry affordance.
    Failed { message: String },
}

/// Inline text for a failed protected load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again.";

#[must_use]
pub fn mount(store: &impl CredentialStore) -> Mount {
    match store.read() {
        Some(credential) => Mount::Proceed { authorization: credential.bearer() },
        None => Mount::Redirect(PUBLIC_ENTRY_PATH),
    }
}

/// Run `fetch` behind the in-page rule.
///
/// `fetch` is called at most once, with the `Authorization` header value.
pub async fn guard_fetch<S, T, F, Fut>(store: &mut S, fetch: F) -> GateOutcome<T>
where
    S: CredentialStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let authorization = match mount(store) {
        Mount::Redirect(location) => return GateOutcome::Redirect(location),
        Mount::Proceed { authorization } => authorization,
    };
    match fetch(authorization).await {
        Ok(value) => GateOutcome::Loaded(value),
        Err(err) => on_failure(store, &err),
    }
}

/// Classify a failed protected request, tearing the session down on 401/403.
pub fn on_failure<S: CredentialStore, T>(store: &mut S, err: &ApiError) -> GateOutcome<T> {
    if err.is_unauthorized() {
        store.remove();
        return GateOutcome::Redirect(PUBLIC_ENTRY_PATH);
    }
    GateOutcome::Failed { message: err.user_message(LOAD_FAILED_MESSAGE) }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
