//! Credential storage contract.
//!
//! Every reader and writer of the session credential goes through
//! [`CredentialStore`]: the login handler, logout, the edge gate and the
//! in-page gate. Implementations differ only in where the cookie lives
//! (an in-memory map here, an axum `CookieJar` in `server`, `document.cookie`
//! in `client`). All of them read a `Cookie` header through
//! [`parse_cookie_header`], so duplicate names resolve the same everywhere.

use std::collections::BTreeMap;

use crate::cookie::{decode_tenant, encode_tenant, parse_cookie_header};
use crate::credential::{Credential, TenantContext};
use crate::{CREDENTIAL_COOKIE, TENANT_COOKIE};

/// Save / read / remove operations over the session cookies.
pub trait CredentialStore {
    /// Store `credential`, replacing any previous one.
    fn save(&mut self, credential: &Credential);

    /// Current credential, or `None`. Never fails.
    fn read(&self) -> Option<Credential>;

    /// Drop the credential and the tenant context.
    fn remove(&mut self);

    /// Store the tenant context, replacing any previous one.
    fn save_tenant(&mut self, tenant: &TenantContext);

    /// Current tenant context, or `None` when absent or unreadable.
    fn read_tenant(&self) -> Option<TenantContext>;
}

/// Cookie jar kept in memory, values stored as they appear on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    cookies: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a request `Cookie` header.
    #[must_use]
    pub fn from_cookie_header(header: &str) -> Self {
        Self { cookies: parse_cookie_header(header) }
    }

    /// Render the jar back into `Cookie` header form.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Raw cookie value by name.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

impl CredentialStore for MemoryStore {
    fn save(&mut self, credential: &Credential) {
        self.cookies
            .insert(CREDENTIAL_COOKIE.to_owned(), credential.as_str().to_owned());
    }

    fn read(&self) -> Option<Credential> {
        self.cookies.get(CREDENTIAL_COOKIE).cloned().and_then(Credential::new)
    }

    fn remove(&mut self) {
        self.cookies.remove(CREDENTIAL_COOKIE);
        self.cookies.remove(TENANT_COOKIE);
    }

    fn save_tenant(&mut self, tenant: &TenantContext) {
        self.cookies.insert(TENANT_COOKIE.to_owned(), encode_tenant(tenant));
    }

    fn read_tenant(&self) -> Option<TenantContext> {
        self.cookies.get(TENANT_COOKIE).and_then(|raw| decode_tenant(raw))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
