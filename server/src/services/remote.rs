//! Remote API client for account operations.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`RemoteAuth`] trait so route tests can substitute
//! an in-memory double. [`HttpRemote`] is the production implementation: a
//! thin reqwest wrapper that maps every non-success status to
//! `session::ApiError` through the same classifier the browser client uses.

use std::time::Duration;

use session::{ApiError, LoginGrant, LoginRequest, RegisterRequest};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const LOGIN_PATH: &str = "/tenant/login";
const REGISTER_PATH: &str = "/api/admin/register";

#[async_trait::async_trait]
pub trait RemoteAuth: Send + Sync {
    /// Exchange email and password for a credential and tenant context.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the remote rejects the
    /// credentials, and the other variants for transport or shape failures.
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, ApiError>;

    /// Create an administrator account.
    ///
    /// # Errors
    ///
    /// Returns the remote's classified failure.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

pub struct HttpRemote {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    /// Build a client for the remote rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn post_json<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ApiError::from_status(status, &text));
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl RemoteAuth for HttpRemote {
    async fn login(&self, request: &LoginRequest) -> Result<LoginGrant, ApiError> {
        let text = self.post_json(LOGIN_PATH, request).await?;
        parse_grant(&text)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post_json(REGISTER_PATH, request).await.map(|_| ())
    }
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Decode a login response. A missing or blank token is a shape failure.
pub(crate) fn parse_grant(json: &str) -> Result<LoginGrant, ApiError> {
    let grant: LoginGrant = serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    if grant.token.trim().is_empty() {
        return Err(ApiError::Decode("login response carried an empty token".into()));
    }
    Ok(grant)
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
