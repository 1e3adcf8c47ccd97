//! Account wire types exchanged between the browser, the console server and
//! the remote API.

use serde::{Deserialize, Serialize};

use crate::credential::{SessionContext, TenantContext};

/// Body of `POST /api/auth/login` and of the remote `POST /tenant/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful remote login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub tenant: Option<TenantContext>,
}

/// Registration form as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of the remote `POST /api/admin/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub const NAMES_REQUIRED: &str = "First name and last name are required.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";

impl RegisterForm {
    /// Check the form and strip the confirmation field.
    ///
    /// # Errors
    ///
    /// Returns the inline message to show when a name is blank or the
    /// passwords differ.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(NAMES_REQUIRED);
        }
        if self.password != self.confirm_password {
            return Err(PASSWORDS_DIFFER);
        }
        Ok(RegisterRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Public view of a session: whether a credential exists and the tenant.
/// The credential itself is never echoed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub authenticated: bool,
    #[serde(default)]
    pub tenant: Option<TenantContext>,
}

impl From<&SessionContext> for SessionView {
    fn from(ctx: &SessionContext) -> Self {
        Self { authenticated: ctx.is_authenticated(), tenant: ctx.tenant.clone() }
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
