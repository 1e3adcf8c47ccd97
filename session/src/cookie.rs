//! `Cookie` / `Set-Cookie` string codec.
//!
//! Both cookies are script-readable session cookies:
//! `path=/; secure; samesite=strict`, no `httponly`, no expiry.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use ::cookie::Cookie;

use crate::credential::TenantContext;

/// Build a cookie assignment string (usable for `document.cookie`).
#[must_use]
pub fn set_cookie_string(name: &str, value: &str, secure: bool) -> String {
    let mut out = format!("{name}={value}; path=/");
    if secure {
        out.push_str("; secure");
    }
    out.push_str("; samesite=strict");
    out
}

/// Build a cookie assignment string that expires `name` immediately.
#[must_use]
pub fn expire_cookie_string(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; samesite=strict")
}

/// Every `(name, value)` pair in a `Cookie` header, in header order.
/// Pairs the `cookie` crate cannot parse are skipped.
pub fn cookie_pairs(header: &str) -> impl Iterator<Item = (String, String)> + '_ {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .map(|cookie| (cookie.name().to_owned(), cookie.value().to_owned()))
}

/// Collapse a `Cookie` header into one value per name.
///
/// A name repeats when cookies of that name are set on several paths or
/// domains. The first non-empty value wins; an empty value is kept only when
/// the name carries nothing else. Every reader of the session cookies (edge
/// gate, server handlers, SSR and the browser) resolves through here.
#[must_use]
pub fn parse_cookie_header(header: &str) -> BTreeMap<String, String> {
    let mut cookies = BTreeMap::new();
    for (name, value) in cookie_pairs(header) {
        match cookies.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                if slot.get().is_empty() {
                    slot.insert(value);
                }
            }
        }
    }
    cookies
}

/// Value of `name` in a `Cookie` header, resolved by [`parse_cookie_header`].
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    parse_cookie_header(header).remove(name)
}

/// Encode a tenant as a cookie-safe value (form-urlencoded JSON).
#[must_use]
pub fn encode_tenant(tenant: &TenantContext) -> String {
    let json = serde_json::to_string(tenant).unwrap_or_default();
    url::form_urlencoded::byte_serialize(json.as_bytes()).collect()
}

/// Decode a value produced by [`encode_tenant`]. Malformed input yields `None`.
#[must_use]
pub fn decode_tenant(raw: &str) -> Option<TenantContext> {
    if raw.is_empty() {
        return None;
    }
    // Encoded values contain no `=` or `&`, so the whole value parses as one key.
    let (json, _) = url::form_urlencoded::parse(raw.as_bytes()).next()?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
