use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "Yes", "  on  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False", " OFF "] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ConsoleConfig::from_lookup
// =============================================================================

#[test]
fn minimal_config_uses_defaults() {
    let config = ConsoleConfig::from_lookup(lookup_from(&[("CONSOLE_API_URL", "http://api.local:5000")])).unwrap();
    assert_eq!(config.api_base_url, "http://api.local:5000");
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.cookie_secure);
    assert_eq!(config.public_base_url, DEFAULT_PUBLIC_BASE_URL);
    assert_eq!(config.remote_timeout_secs, DEFAULT_REMOTE_TIMEOUT_SECS);
}

#[test]
fn missing_api_url_is_an_error() {
    assert_eq!(ConsoleConfig::from_lookup(lookup_from(&[])), Err(ConfigError::Missing("CONSOLE_API_URL")));
    assert_eq!(
        ConsoleConfig::from_lookup(lookup_from(&[("CONSOLE_API_URL", "   ")])),
        Err(ConfigError::Missing("CONSOLE_API_URL"))
    );
}

#[test]
fn trailing_slashes_are_trimmed() {
    let config = ConsoleConfig::from_lookup(lookup_from(&[
        ("CONSOLE_API_URL", "https://api.example.com/"),
        ("PUBLIC_BASE_URL", "https://console.example.com//"),
    ]))
    .unwrap();
    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.public_base_url, "https://console.example.com");
}

#[test]
fn explicit_values_override_defaults() {
    let config = ConsoleConfig::from_lookup(lookup_from(&[
        ("CONSOLE_API_URL", "http://api"),
        ("PORT", "8080"),
        ("COOKIE_SECURE", "false"),
        ("REMOTE_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert!(!config.cookie_secure);
    assert_eq!(config.remote_timeout_secs, 5);
}

#[test]
fn invalid_port_is_reported() {
    let err = ConsoleConfig::from_lookup(lookup_from(&[("CONSOLE_API_URL", "http://api"), ("PORT", "eighty")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn invalid_cookie_secure_is_reported() {
    let err = ConsoleConfig::from_lookup(lookup_from(&[("CONSOLE_API_URL", "http://api"), ("COOKIE_SECURE", "sometimes")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COOKIE_SECURE", .. }));
}
