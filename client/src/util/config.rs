//! Build-time endpoints for the browser bundle.
//!
//! The WASM bundle cannot read the server's environment, so both origins are
//! baked in at compile time with `option_env!`.

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Remote API origin without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("CONSOLE_API_URL").unwrap_or(DEFAULT_API_URL).trim_end_matches('/')
}

/// Public origin used in shareable chat links.
#[must_use]
pub fn public_base_url() -> &'static str {
    option_env!("PUBLIC_BASE_URL").unwrap_or(DEFAULT_PUBLIC_BASE_URL).trim_end_matches('/')
}

/// Public support chat link for a tenant slug.
#[must_use]
pub fn share_url(base: &str, slug: &str) -> String {
    format!("{}/chat/{slug}", base.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
