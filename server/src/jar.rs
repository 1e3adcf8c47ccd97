//! `CredentialStore` over an axum-extra `CookieJar`.
//!
//! Reads come from the request's `Cookie` headers, resolved by
//! `session::cookie::parse_cookie_header` exactly as the edge gate and the
//! browser resolve them. Writes go into a fresh `CookieJar` and become
//! `Set-Cookie` headers once the jar is returned from a handler. Cookies are written the
//! same way the browser client writes them (script-readable, `path=/`,
//! `SameSite=Strict`) so the in-page gate can read what the server set.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use session::cookie::{decode_tenant, encode_tenant};
use session::{CREDENTIAL_COOKIE, Credential, CredentialStore, MemoryStore, TENANT_COOKIE, TenantContext};
use time::Duration;

/// All `Cookie` request headers joined into one header value.
pub(crate) fn request_cookies(headers: &HeaderMap) -> String {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ")
}

pub struct JarStore {
    request: MemoryStore,
    jar: CookieJar,
    secure: bool,
}

impl JarStore {
    #[must_use]
    pub fn new(headers: &HeaderMap, secure: bool) -> Self {
        Self {
            request: MemoryStore::from_cookie_header(&request_cookies(headers)),
            jar: CookieJar::new(),
            secure,
        }
    }

    /// Hand the jar back for use as a response part.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn put(&mut self, name: &'static str, value: String) {
        let cookie = Cookie::build((name, value))
            .path("/")
            .http_only(false)
            .same_site(SameSite::Strict)
            .secure(self.secure);
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }

    fn clear(&mut self, name: &'static str) {
        let cookie = Cookie::build((name, ""))
            .path("/")
            .http_only(false)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::ZERO);
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }
}

impl CredentialStore for JarStore {
    fn save(&mut self, credential: &Credential) {
        self.put(CREDENTIAL_COOKIE, credential.as_str().to_owned());
    }

    fn read(&self) -> Option<Credential> {
        match self.jar.get(CREDENTIAL_COOKIE) {
            Some(written) => Credential::new(written.value()),
            None => self.request.read(),
        }
    }

    fn remove(&mut self) {
        self.clear(CREDENTIAL_COOKIE);
        self.clear(TENANT_COOKIE);
    }

    fn save_tenant(&mut self, tenant: &TenantContext) {
        self.put(TENANT_COOKIE, encode_tenant(tenant));
    }

    fn read_tenant(&self) -> Option<TenantContext> {
        match self.jar.get(TENANT_COOKIE) {
            Some(written) => decode_tenant(written.value()),
            None => self.request.read_tenant(),
        }
    }
}

#[cfg(test)]
#[path = "jar_test.rs"]
mod tests;
