//! Credential, tenant context, and the per-app session context.
//!
//! DESIGN
//! ======
//! `SessionContext` is built once at the application root from a
//! [`CredentialStore`] and handed to views; views never read cookies on
//! their own. [`SessionContext::establish`] is the only function that writes
//! a fresh login into a store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::CredentialStore;

/// Opaque bearer token issued by the remote API on login.
///
/// Never empty. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Returns `None` for empty or whitespace-only input,
    /// which every caller treats as "no credential".
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Organizational scope the signed-in user's queries apply to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

/// Session state shared by every view of one browser tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    pub credential: Option<Credential>,
    pub tenant: Option<TenantContext>,
}

impl SessionContext {
    /// Read the current session out of `store`.
    #[must_use]
    pub fn load(store: &impl CredentialStore) -> Self {
        Self { credential: store.read(), tenant: store.read_tenant() }
    }

    /// Persist a successful login and return the resulting context.
    ///
    /// Credential and tenant are written together here and nowhere else.
    pub fn establish(
        store: &mut impl CredentialStore,
        credential: Credential,
        tenant: Option<TenantContext>,
    ) -> Self {
        store.save(&credential);
        if let Some(tenant) = &tenant {
            store.save_tenant(tenant);
        }
        Self { credential: Some(credential), tenant }
    }

    /// Clear the store and the in-memory context (logout).
    pub fn teardown(&mut self, store: &mut impl CredentialStore) {
        store.remove();
        *self = Self::default();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant.as_ref().map(|t| t.id.as_str()).filter(|id| !id.is_empty())
    }

    #[must_use]
    pub fn tenant_slug(&self) -> Option<&str> {
        self.tenant.as_ref().map(|t| t.slug.as_str()).filter(|slug| !slug.is_empty())
    }
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;
