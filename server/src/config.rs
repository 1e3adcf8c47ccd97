//! Console server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Remote API origin, without a trailing slash.
    pub api_base_url: String,
    pub port: u16,
    /// Whether session cookies carry the `secure` attribute.
    pub cookie_secure: bool,
    /// Origin used when building shareable chat links.
    pub public_base_url: String,
    pub remote_timeout_secs: u64,
}

impl ConsoleConfig {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `CONSOLE_API_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: default true
    /// - `PUBLIC_BASE_URL`: default `http://localhost:3000`
    /// - `REMOTE_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if `CONSOLE_API_URL` is missing or a value is unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ConsoleConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("CONSOLE_API_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty())
            .ok_or(ConfigError::Missing("CONSOLE_API_URL"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => true,
        };

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_owned());

        let remote_timeout_secs = match lookup("REMOTE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid { var: "REMOTE_TIMEOUT_SECS", value: raw })?,
            None => DEFAULT_REMOTE_TIMEOUT_SECS,
        };

        Ok(Self { api_base_url, port, cookie_secure, public_base_url, remote_timeout_secs })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
