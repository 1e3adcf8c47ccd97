use std::sync::Arc;

use axum::body::to_bytes;
use axum::http::header::{COOKIE, HeaderValue, SET_COOKIE};
use session::TenantContext;
use session::cookie::encode_tenant;

use super::*;
use crate::state::test_helpers::{MockRemote, test_app_state};

fn tenant() -> TenantContext {
    crate::state::test_helpers::test_tenant()
}

fn credentials() -> LoginRequest {
    LoginRequest { email: "admin@acme.test".into(), password: "pw".into() }
}

fn register_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        username: "ada".into(),
        email: "ada@acme.test".into(),
        password: "pw".into(),
        confirm_password: "pw".into(),
    }
}

fn cookies(cookie_header: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(cookie_header).unwrap());
    headers
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookies(response: &Response) -> Vec<String> {
    response.headers().get_all(SET_COOKIE).iter().map(|v| v.to_str().unwrap().to_owned()).collect()
}

// =============================================================================
// remote_error_status
// =============================================================================

#[test]
fn remote_error_status_mapping() {
    assert_eq!(remote_error_status(&ApiError::Unauthorized { status: 403 }), StatusCode::UNAUTHORIZED);
    assert_eq!(
        remote_error_status(&ApiError::Status { status: 409, message: None }),
        StatusCode::CONFLICT
    );
    assert_eq!(remote_error_status(&ApiError::Network("refused".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(remote_error_status(&ApiError::Decode("bad".into())), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_success_sets_both_cookies_and_returns_view() {
    let remote = Arc::new(MockRemote::granting("tok-9"));
    let state = test_app_state(remote.clone());

    let response = login(State(state), HeaderMap::new(), Json(credentials())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("token=tok-9")));
    let tenant_cookie = format!("tenantData={}", encode_tenant(&tenant()));
    assert!(cookies.iter().any(|c| c.starts_with(&tenant_cookie)));

    let json = body_json(response).await;
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["tenant"]["slug"], "acme");
    assert!(json.get("token").is_none());

    assert_eq!(remote.logins.lock().unwrap().as_slice(), &[credentials()]);
}

#[tokio::test]
async fn login_rejected_returns_invalid_credentials_without_cookies() {
    let state = test_app_state(Arc::new(MockRemote::failing(ApiError::Unauthorized { status: 401 })));
    let response = login(State(state), HeaderMap::new(), Json(credentials())).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());
    assert_eq!(body_json(response).await["error"], INVALID_LOGIN);
}

#[tokio::test]
async fn login_passes_through_other_remote_status_and_message() {
    let err = ApiError::Status { status: 429, message: Some("Too many attempts".into()) };
    let state = test_app_state(Arc::new(MockRemote::failing(err)));
    let response = login(State(state), HeaderMap::new(), Json(credentials())).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(response).await["error"], "Too many attempts");
}

#[tokio::test]
async fn login_network_failure_is_bad_gateway() {
    let state = test_app_state(Arc::new(MockRemote::failing(ApiError::Network("refused".into()))));
    let response = login(State(state), HeaderMap::new(), Json(credentials())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"], SERVER_ERROR);
}

#[tokio::test]
async fn login_with_blank_token_sets_no_cookie() {
    let state = test_app_state(Arc::new(MockRemote::granting("  ")));
    let response = login(State(state), HeaderMap::new(), Json(credentials())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(set_cookies(&response).is_empty());
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_success_is_created() {
    let remote = Arc::new(MockRemote::granting("unused"));
    let state = test_app_state(remote.clone());
    let response = register(State(state), Json(register_form())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(set_cookies(&response).is_empty());
    assert_eq!(remote.registrations.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn register_rejects_missing_names_before_calling_remote() {
    let remote = Arc::new(MockRemote::granting("unused"));
    let state = test_app_state(remote.clone());
    let mut form = register_form();
    form.last_name = String::new();

    let response = register(State(state), Json(form)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], session::account::NAMES_REQUIRED);
    assert!(remote.registrations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn register_rejects_password_mismatch() {
    let state = test_app_state(Arc::new(MockRemote::granting("unused")));
    let mut form = register_form();
    form.confirm_password = "other".into();

    let response = register(State(state), Json(form)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], session::account::PASSWORDS_DIFFER);
}

#[tokio::test]
async fn register_surfaces_remote_message() {
    let err = ApiError::Status { status: 400, message: Some("Email already registered".into()) };
    let state = test_app_state(Arc::new(MockRemote::failing(err)));
    let response = register(State(state), Json(register_form())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Email already registered");
}

// =============================================================================
// logout / session
// =============================================================================

#[tokio::test]
async fn logout_expires_both_cookies() {
    let state = test_app_state(Arc::new(MockRemote::granting("unused")));
    let response = logout(State(state), cookies("token=abc")).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("token=;") && c.contains("Max-Age=0")));
    assert!(cookies.iter().any(|c| c.starts_with("tenantData=;") && c.contains("Max-Age=0")));
}

#[tokio::test]
async fn session_reports_cookie_state() {
    let state = test_app_state(Arc::new(MockRemote::granting("unused")));
    let header = format!("token=abc; tenantData={}", encode_tenant(&tenant()));
    let Json(view) = current_session(State(state.clone()), cookies(&header)).await;
    assert!(view.authenticated);
    assert_eq!(view.tenant, Some(tenant()));

    let Json(view) = current_session(State(state), HeaderMap::new()).await;
    assert_eq!(view, SessionView::default());
}
