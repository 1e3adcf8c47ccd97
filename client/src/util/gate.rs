//! In-page gate wiring for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard layout calls [`install_client_gate`] once; pages route their
//! data loads through [`load_guarded`]. Mutations call [`authorization`]
//! before sending and [`settle_failure`] on error. Every helper reads the
//! credential through [`BrowserCookieStore`], the same cookie the edge gate
//! checks. Helpers that end the session only reset the session signal; the
//! installed gate owns navigation.

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::gate::on_failure;
use session::{ApiError, GateOutcome, Mount, SessionContext, mount};

use crate::util::credential::BrowserCookieStore;

/// Data state of one protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    /// Inline message; the view offers a retry.
    Failed(String),
}

impl<T> Load<T> {
    /// View state for a gate outcome, or the location to navigate to.
    ///
    /// # Errors
    ///
    /// Returns the redirect target when the session was rejected or absent.
    pub fn from_outcome(outcome: GateOutcome<T>) -> Result<Self, &'static str> {
        match outcome {
            GateOutcome::Redirect(location) => Err(location),
            GateOutcome::Loaded(value) => Ok(Self::Ready(value)),
            GateOutcome::Failed { message } => Ok(Self::Failed(message)),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

fn leave(session: RwSignal<SessionContext>) {
    session.set(SessionContext::default());
}

/// Keep the protected subtree behind the in-page rule.
///
/// Runs on mount and again whenever the session signal changes; as soon as
/// the store holds no credential the view navigates to the entry page.
pub fn install_client_gate<N>(session: RwSignal<SessionContext>, navigate: N)
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        session.track();
        if let Mount::Redirect(location) = mount(&BrowserCookieStore) {
            navigate(location, NavigateOptions::default());
        }
    });
}

/// Run one protected load and publish the result into `target`.
///
/// Without a credential `fetch` is never called. A 401/403 ends the session,
/// which the installed gate turns into a redirect; every other failure lands
/// in `target` as [`Load::Failed`].
pub fn load_guarded<T, F, Fut>(session: RwSignal<SessionContext>, target: RwSignal<Load<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Load::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut store = BrowserCookieStore;
        let outcome = session::guard_fetch(&mut store, fetch).await;
        match Load::from_outcome(outcome) {
            Ok(state) => target.set(state),
            Err(_) => leave(session),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, fetch);
    }
}

/// `Authorization` value for a mutation, or `None` after ending the session.
pub fn authorization(session: RwSignal<SessionContext>) -> Option<String> {
    match mount(&BrowserCookieStore) {
        Mount::Proceed { authorization } => Some(authorization),
        Mount::Redirect(_) => {
            leave(session);
            None
        }
    }
}

/// Classify a failed mutation. Returns the inline message to show, or `None`
/// when the credential was rejected and the session has ended.
pub fn settle_failure(session: RwSignal<SessionContext>, err: &ApiError, fallback: &str) -> Option<String> {
    let mut store = BrowserCookieStore;
    match on_failure::<_, ()>(&mut store, err) {
        GateOutcome::Redirect(_) => {
            leave(session);
            None
        }
        GateOutcome::Loaded(()) | GateOutcome::Failed { .. } => Some(err.user_message(fallback)),
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
