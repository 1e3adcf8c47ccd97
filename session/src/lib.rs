//! Shared session model for the admin console.
//!
//! This crate owns the credential, the tenant context, the cookie codec and
//! both access rules. `server` evaluates the edge rule before rendering and
//! `client` evaluates the in-page rule on mount; both read the same `token`
//! cookie through [`CredentialStore`], so they cannot reach different
//! decisions for the same browser.

pub mod account;
pub mod cookie;
pub mod credential;
pub mod edge;
pub mod error;
pub mod gate;
pub mod store;

pub use account::{LoginGrant, LoginRequest, RegisterForm, RegisterRequest, SessionView};
pub use credential::{Credential, SessionContext, TenantContext};
pub use edge::{EdgeDecision, edge_decision, is_protected};
pub use error::ApiError;
pub use gate::{GateOutcome, Mount, guard_fetch, mount};
pub use store::{CredentialStore, MemoryStore};

/// Cookie holding the bearer credential.
pub const CREDENTIAL_COOKIE: &str = "token";

/// Cookie holding the URL-encoded tenant context JSON.
pub const TENANT_COOKIE: &str = "tenantData";

/// Path prefix guarded by both gates. Sub-paths are guarded too.
pub const PROTECTED_PREFIX: &str = "/dashboard";

/// Redirect target for every failed gate check.
pub const PUBLIC_ENTRY_PATH: &str = "/";
