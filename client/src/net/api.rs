//! REST helpers for the console server and the remote API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport is a stub returning [`ApiError::Network`]
//! since these requests are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success status goes through `ApiError::from_status`, the same
//! classifier the server proxy uses, so a 401/403 from any dashboard call is
//! recognizable by the in-page gate.
//!
//! Every dashboard helper takes the `Authorization` value produced by the
//! gate and sends it unchanged. The public support chat sends none.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{ApiError, LoginRequest, RegisterForm, SessionView};

use super::types::{
    Announcement, AnnouncementDraft, AskRequest, AskResponse, ChatAction, ChatRecord, Faq, FaqDraft, Process,
    ProcessDraft, ResponseCount, ResponseStats, TimeRange,
};
use crate::util::config::api_base_url;

// =============================================================================
// ENDPOINTS
// =============================================================================

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const LOGOUT_PATH: &str = "/api/auth/logout";

fn remote(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

fn process_path(op: &str, id: &str) -> String {
    format!("/api/processes/{op}/{id}")
}

fn announcement_path(op: &str, id: &str) -> String {
    format!("/api/announcements/{op}/{id}")
}

fn faqs_path(tenant_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new()).append_pair("tenantId", tenant_id).finish();
    format!("/faqs/get?{query}")
}

fn chat_path(op: &str, id: &str) -> String {
    format!("/api/chat/{op}/{id}")
}

fn response_count_path(range: TimeRange) -> String {
    format!("/api/analytics/response-count?range={}", range.as_query())
}

fn ask_path(slug: &str) -> String {
    format!("/ask/chat/{slug}")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Issue one request and return the body text of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(
    verb: Verb,
    url: &str,
    authorization: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    };
    if let Some(authorization) = authorization {
        builder = builder.header("Authorization", authorization);
    }
    let sent = match body {
        Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::from_status(status, &text));
    }
    Ok(text)
}

#[cfg(not(feature = "hydrate"))]
async fn send(
    verb: Verb,
    url: &str,
    authorization: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    let _ = (verb, url, authorization, body);
    Err(ApiError::Network("not available on server".to_owned()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str, authorization: Option<&str>) -> Result<T, ApiError> {
    let text = send(Verb::Get, url, authorization, None).await?;
    decode(&text)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    url: &str,
    authorization: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let text = send(verb, url, authorization, Some(encode(body)?)).await?;
    decode(&text)
}

/// Send and discard the response body.
async fn execute<B: Serialize>(verb: Verb, url: &str, authorization: Option<&str>, body: Option<&B>) -> Result<(), ApiError> {
    let body = body.map(encode).transpose()?;
    send(verb, url, authorization, body).await.map(|_| ())
}

// =============================================================================
// CONSOLE SERVER (same origin)
// =============================================================================

/// `POST /api/auth/login`. The server sets the session cookies on success.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] for rejected credentials, other variants for
/// transport or server failures.
pub async fn login(request: &LoginRequest) -> Result<SessionView, ApiError> {
    send_json(Verb::Post, LOGIN_PATH, None, request).await
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the classified server failure.
pub async fn register(form: &RegisterForm) -> Result<(), ApiError> {
    execute(Verb::Post, REGISTER_PATH, None, Some(form)).await
}

/// `POST /api/auth/logout`. The server expires the session cookies.
///
/// # Errors
///
/// Returns the transport failure, if any.
pub async fn logout() -> Result<(), ApiError> {
    execute::<()>(Verb::Post, LOGOUT_PATH, None, None).await
}

// =============================================================================
// PROCESSES
// =============================================================================

/// # Errors
///
/// Returns the classified remote failure (same for every helper below).
pub async fn list_processes(authorization: &str) -> Result<Vec<Process>, ApiError> {
    get_json(&remote("/api/processes/get"), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn get_process(authorization: &str, id: &str) -> Result<Process, ApiError> {
    get_json(&remote(&process_path("getbyid", id)), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn create_process(authorization: &str, draft: &ProcessDraft) -> Result<(), ApiError> {
    execute(Verb::Post, &remote("/api/processes/create"), Some(authorization), Some(draft)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn update_process(authorization: &str, id: &str, draft: &ProcessDraft) -> Result<Process, ApiError> {
    send_json(Verb::Put, &remote(&process_path("update", id)), Some(authorization), draft).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn delete_process(authorization: &str, id: &str) -> Result<(), ApiError> {
    execute::<()>(Verb::Delete, &remote(&process_path("delete", id)), Some(authorization), None).await
}

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

#[allow(clippy::missing_errors_doc)]
pub async fn list_announcements(authorization: &str) -> Result<Vec<Announcement>, ApiError> {
    get_json(&remote("/api/announcements/get"), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn get_announcement(authorization: &str, id: &str) -> Result<Announcement, ApiError> {
    get_json(&remote(&announcement_path("getbyid", id)), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn create_announcement(authorization: &str, draft: &AnnouncementDraft) -> Result<(), ApiError> {
    execute(Verb::Post, &remote("/api/announcements/create"), Some(authorization), Some(draft)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn update_announcement(
    authorization: &str,
    id: &str,
    draft: &AnnouncementDraft,
) -> Result<Announcement, ApiError> {
    send_json(Verb::Put, &remote(&announcement_path("update", id)), Some(authorization), draft).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn delete_announcement(authorization: &str, id: &str) -> Result<(), ApiError> {
    execute::<()>(Verb::Delete, &remote(&announcement_path("delete", id)), Some(authorization), None).await
}

// =============================================================================
// FAQS
// =============================================================================

#[allow(clippy::missing_errors_doc)]
pub async fn list_faqs(authorization: &str, tenant_id: &str) -> Result<Vec<Faq>, ApiError> {
    get_json(&remote(&faqs_path(tenant_id)), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn create_faq(authorization: &str, draft: &FaqDraft) -> Result<(), ApiError> {
    execute(Verb::Post, &remote("/faqs/create"), Some(authorization), Some(draft)).await
}

// =============================================================================
// CHAT RECORDS + ANALYTICS
// =============================================================================

#[allow(clippy::missing_errors_doc)]
pub async fn list_chats(authorization: &str) -> Result<Vec<ChatRecord>, ApiError> {
    get_json(&remote("/api/chat/chats"), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn rate_chat(authorization: &str, id: &str, action: ChatAction) -> Result<(), ApiError> {
    execute(Verb::Put, &remote(&chat_path("update-chat-status", id)), Some(authorization), Some(&action)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn delete_chat(authorization: &str, id: &str) -> Result<(), ApiError> {
    execute::<()>(Verb::Delete, &remote(&chat_path("delete", id)), Some(authorization), None).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn response_stats(authorization: &str) -> Result<ResponseStats, ApiError> {
    get_json(&remote("/api/analytics/chat-response-stats"), Some(authorization)).await
}

#[allow(clippy::missing_errors_doc)]
pub async fn response_counts(authorization: &str, range: TimeRange) -> Result<Vec<ResponseCount>, ApiError> {
    get_json(&remote(&response_count_path(range)), Some(authorization)).await
}

// =============================================================================
// PUBLIC SUPPORT CHAT
// =============================================================================

/// `POST /ask/chat/{slug}`. Unauthenticated.
///
/// # Errors
///
/// Returns the classified remote failure.
pub async fn ask_chat(slug: &str, request: &AskRequest) -> Result<AskResponse, ApiError> {
    send_json(Verb::Post, &remote(&ask_path(slug)), None, request).await
}
