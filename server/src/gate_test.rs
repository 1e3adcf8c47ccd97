use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use super::*;

fn app() -> Router {
    Router::new()
        .route("/", get(|| async { "entry" }))
        .route("/dashboard", get(|| async { "dashboard" }))
        .route("/dashboard/records", get(|| async { "records" }))
        .route("/dashboardx", get(|| async { "lookalike" }))
        .route("/chat/{slug}", get(|| async { "chat" }))
        .layer(middleware::from_fn(edge_gate))
}

async fn get_path(path: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = axum::http::Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

// =============================================================================
// PROTECTED PATHS
// =============================================================================

#[tokio::test]
async fn dashboard_without_cookie_redirects_to_entry() {
    let response = get_path("/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn nested_dashboard_path_is_protected() {
    let response = get_path("/dashboard/records", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn empty_cookie_value_redirects() {
    let response = get_path("/dashboard", Some("token=")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn unrelated_cookie_redirects() {
    let response = get_path("/dashboard", Some("session_token=abc")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn dashboard_with_cookie_passes_unchanged() {
    let response = get_path("/dashboard", Some("token=abc")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn nested_dashboard_with_cookie_passes() {
    let response = get_path("/dashboard/records", Some("theme=dark; token=abc")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// PUBLIC PATHS
// =============================================================================

#[tokio::test]
async fn entry_page_passes_without_cookie() {
    assert_eq!(get_path("/", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_chat_passes_without_cookie() {
    assert_eq!(get_path("/chat/acme", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn lookalike_prefix_is_not_protected() {
    assert_eq!(get_path("/dashboardx", None).await.status(), StatusCode::OK);
}

// =============================================================================
// AGREEMENT WITH THE IN-PAGE GATE
// =============================================================================

#[tokio::test]
async fn edge_and_browser_agree_on_duplicate_token_cookies() {
    let headers = [
        "token=; token=abc",
        "token=abc; token=",
        "token=; token=",
        "token=a; token=b",
        "theme=dark; token=; other=1; token=abc",
        "tokenx=abc",
    ];
    for cookies in headers {
        let edge_passes = get_path("/dashboard", Some(cookies)).await.status() == StatusCode::OK;
        let browser_proceeds = client::util::credential::credential_in_cookies(cookies).is_some();
        assert_eq!(edge_passes, browser_proceeds, "cookies {cookies:?}");
    }
}

#[tokio::test]
async fn empty_duplicate_does_not_shadow_credential() {
    assert_eq!(get_path("/dashboard", Some("token=; token=abc")).await.status(), StatusCode::OK);
    assert_eq!(get_path("/dashboard", Some("token=abc; token=")).await.status(), StatusCode::OK);
}
