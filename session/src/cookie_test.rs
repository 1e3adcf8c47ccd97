use super::*;

#[test]
fn set_cookie_string_secure_has_all_attributes() {
    assert_eq!(set_cookie_string("token", "abc", true), "token=abc; path=/; secure; samesite=strict");
}

#[test]
fn set_cookie_string_insecure_drops_secure_only() {
    let cookie = set_cookie_string("token", "abc", false);
    assert_eq!(cookie, "token=abc; path=/; samesite=strict");
    assert!(!cookie.contains("httponly"));
}

#[test]
fn expire_cookie_string_is_in_the_past() {
    let cookie = expire_cookie_string("token");
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("1970"));
}

#[test]
fn find_cookie_picks_named_value() {
    let header = "theme=dark; token=abc; tenantData=x";
    assert_eq!(find_cookie(header, "token").as_deref(), Some("abc"));
    assert_eq!(find_cookie(header, "tenantData").as_deref(), Some("x"));
}

#[test]
fn find_cookie_does_not_match_prefix_names() {
    assert_eq!(find_cookie("tokenizer=1", "token"), None);
}

#[test]
fn find_cookie_returns_empty_value_verbatim() {
    assert_eq!(find_cookie("token=", "token").as_deref(), Some(""));
}

#[test]
fn find_cookie_missing_is_none() {
    assert_eq!(find_cookie("", "token"), None);
    assert_eq!(find_cookie("a=b", "token"), None);
}

#[test]
fn cookie_pairs_skips_garbage() {
    let pairs: Vec<_> = cookie_pairs("a=1; junk; =2; b=3").collect();
    assert_eq!(pairs, vec![("a".to_owned(), "1".to_owned()), ("b".to_owned(), "3".to_owned())]);
}

#[test]
fn duplicate_names_keep_first_non_empty_value() {
    assert_eq!(find_cookie("token=; token=abc", "token").as_deref(), Some("abc"));
    assert_eq!(find_cookie("token=abc; token=", "token").as_deref(), Some("abc"));
    assert_eq!(find_cookie("token=a; token=b", "token").as_deref(), Some("a"));
    assert_eq!(find_cookie("token=; token=", "token").as_deref(), Some(""));
}

#[test]
fn parse_cookie_header_trims_and_collapses() {
    let cookies = parse_cookie_header(" theme = dark ;token=;token=abc");
    assert_eq!(cookies.get("theme").map(String::as_str), Some("dark"));
    assert_eq!(cookies.get("token").map(String::as_str), Some("abc"));
    assert_eq!(cookies.len(), 2);
}

#[test]
fn tenant_cookie_value_is_cookie_safe_and_decodes() {
    let tenant = TenantContext { id: "t 1".into(), slug: "acme".into(), name: "Acme; Inc=".into() };
    let encoded = encode_tenant(&tenant);
    assert!(!encoded.contains(';'));
    assert!(!encoded.contains('='));
    assert!(!encoded.contains(' '));
    assert_eq!(decode_tenant(&encoded), Some(tenant));
}

#[test]
fn decode_tenant_rejects_malformed() {
    assert_eq!(decode_tenant(""), None);
    assert_eq!(decode_tenant("not-json"), None);
    assert_eq!(decode_tenant("%7B%22slug%22%3A%22x%22%7D"), None);
}
