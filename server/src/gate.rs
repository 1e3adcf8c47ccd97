//! Edge gate: request middleware that runs before any page is rendered.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation passes through [`edge_gate`]. Requests for the protected
//! dashboard area without a `token` cookie are answered with a redirect to the
//! public entry page; nothing downstream (SSR, static files, API handlers)
//! sees them. The decision itself lives in `session::edge_decision` so the
//! browser-side gate applies the identical rule.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use session::cookie::find_cookie;
use session::{CREDENTIAL_COOKIE, EdgeDecision, edge_decision};

use crate::jar::request_cookies;

pub async fn edge_gate(request: Request, next: Next) -> Response {
    let token = find_cookie(&request_cookies(request.headers()), CREDENTIAL_COOKIE);

    match edge_decision(request.uri().path(), token.as_deref()) {
        EdgeDecision::Pass => next.run(request).await,
        EdgeDecision::Redirect(location) => {
            tracing::debug!(path = %request.uri().path(), "no credential; redirecting to entry page");
            Redirect::temporary(location).into_response()
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
