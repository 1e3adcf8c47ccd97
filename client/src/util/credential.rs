//! Browser implementation of the credential storage contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `token` and `tenantData` cookies are the only session record. The
//! server writes them on login; this store lets in-page code read them and
//! expire them on logout or a rejected credential. Under SSR there is no
//! `document`, so reads come back empty and writes are dropped.

use session::cookie::{decode_tenant, encode_tenant, expire_cookie_string, find_cookie, set_cookie_string};
use session::{CREDENTIAL_COOKIE, Credential, CredentialStore, SessionContext, TENANT_COOKIE, TenantContext};

/// `document.cookie`-backed [`CredentialStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookieStore;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl BrowserCookieStore {
    fn cookie_header() -> String {
        #[cfg(feature = "hydrate")]
        {
            html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn assign(assignment: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(assignment);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = assignment;
        }
    }

    fn page_is_https() -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().protocol().ok())
                .is_some_and(|protocol| secure_for_protocol(&protocol))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Credential as the browser sees it in a `document.cookie` string.
pub fn credential_in_cookies(cookies: &str) -> Option<Credential> {
    find_cookie(cookies, CREDENTIAL_COOKIE).and_then(Credential::new)
}

/// Cookies written from script carry `secure` only on HTTPS pages.
pub(crate) fn secure_for_protocol(protocol: &str) -> bool {
    protocol.eq_ignore_ascii_case("https:")
}

impl CredentialStore for BrowserCookieStore {
    fn save(&mut self, credential: &Credential) {
        Self::assign(&set_cookie_string(CREDENTIAL_COOKIE, credential.as_str(), Self::page_is_https()));
    }

    fn read(&self) -> Option<Credential> {
        credential_in_cookies(&Self::cookie_header())
    }

    fn remove(&mut self) {
        Self::assign(&expire_cookie_string(CREDENTIAL_COOKIE));
        Self::assign(&expire_cookie_string(TENANT_COOKIE));
    }

    fn save_tenant(&mut self, tenant: &TenantContext) {
        Self::assign(&set_cookie_string(TENANT_COOKIE, &encode_tenant(tenant), Self::page_is_https()));
    }

    fn read_tenant(&self) -> Option<TenantContext> {
        find_cookie(&Self::cookie_header(), TENANT_COOKIE).and_then(|raw| decode_tenant(&raw))
    }
}

/// Session context for the application root.
///
/// In the browser it is read from `document.cookie`; during SSR from the
/// request's `Cookie` header, so both renders start from the same cookies.
pub fn initial_session() -> SessionContext {
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        use leptos::prelude::use_context;
        use session::MemoryStore;

        use_context::<http::request::Parts>()
            .map(|parts| {
                let header = parts
                    .headers
                    .get_all(http::header::COOKIE)
                    .iter()
                    .filter_map(|value| value.to_str().ok())
                    .collect::<Vec<_>>()
                    .join("; ");
                SessionContext::load(&MemoryStore::from_cookie_header(&header))
            })
            .unwrap_or_default()
    }
    #[cfg(not(all(feature = "ssr", not(feature = "hydrate"))))]
    {
        SessionContext::load(&BrowserCookieStore)
    }
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;
