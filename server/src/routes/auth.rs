//! Auth routes: login proxy, registration proxy, logout, session probe.
//!
//! The login handler is the only place a fresh credential enters the
//! browser. It writes the `token` and `tenantData` cookies through
//! [`JarStore`] and `SessionContext::establish`, so the edge gate and the
//! in-page gate read exactly what was written here.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use session::{ApiError, Credential, LoginRequest, RegisterForm, SessionContext, SessionView};

use crate::jar::JarStore;
use crate::state::AppState;

pub(crate) const INVALID_LOGIN: &str = "Invalid email or password";
pub(crate) const SERVER_ERROR: &str = "Server error";
const LOGIN_FAILED: &str = "Login failed";
const REGISTER_FAILED: &str = "Registration failed";

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn error_json(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Status to answer the browser with for a failed remote call.
pub(crate) fn remote_error_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        ApiError::Status { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
        ApiError::Network(_) | ApiError::Decode(_) => StatusCode::BAD_GATEWAY,
    }
}

fn remote_error_response(err: &ApiError, unauthorized: &str, fallback: &str) -> Response {
    let status = remote_error_status(err);
    match err {
        ApiError::Unauthorized { .. } => error_json(status, unauthorized),
        ApiError::Status { .. } => error_json(status, &err.user_message(fallback)),
        ApiError::Network(_) | ApiError::Decode(_) => error_json(status, SERVER_ERROR),
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: exchange credentials with the remote and set the
/// session cookies.
pub async fn login(State(state): State<AppState>, headers: HeaderMap, Json(body): Json<LoginRequest>) -> Response {
    let grant = match state.remote.login(&body).await {
        Ok(grant) => grant,
        Err(e) => {
            if e.is_unauthorized() {
                tracing::warn!(status = ?e.status(), "remote rejected login");
            } else {
                tracing::error!(error = %e, "remote login failed");
            }
            return remote_error_response(&e, INVALID_LOGIN, LOGIN_FAILED);
        }
    };

    let Some(credential) = Credential::new(grant.token) else {
        tracing::error!("remote login returned an empty token");
        return error_json(StatusCode::BAD_GATEWAY, SERVER_ERROR);
    };

    let mut store = JarStore::new(&headers, state.config.cookie_secure);
    let ctx = SessionContext::establish(&mut store, credential, grant.tenant);
    tracing::info!(tenant = ?ctx.tenant_slug(), "login succeeded");

    (store.into_jar(), Json(SessionView::from(&ctx))).into_response()
}

/// `POST /api/auth/register`: validate the form, then create the account
/// remotely. No session is established.
pub async fn register(State(state): State<AppState>, Json(form): Json<RegisterForm>) -> Response {
    let request = match form.validate() {
        Ok(request) => request,
        Err(message) => return error_json(StatusCode::BAD_REQUEST, message),
    };

    match state.remote.register(&request).await {
        Ok(()) => (StatusCode::CREATED, Json(json!({ "ok": true }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "remote registration failed");
            remote_error_response(&e, REGISTER_FAILED, REGISTER_FAILED)
        }
    }
}

/// `POST /api/auth/logout`: expire both session cookies.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let mut store = JarStore::new(&headers, state.config.cookie_secure);
    let mut ctx = SessionContext::load(&store);
    ctx.teardown(&mut store);
    (store.into_jar(), StatusCode::NO_CONTENT)
}

/// `GET /api/auth/session`: report whether the request carries a session.
pub async fn current_session(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionView> {
    let store = JarStore::new(&headers, state.config.cookie_secure);
    Json(SessionView::from(&SessionContext::load(&store)))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
