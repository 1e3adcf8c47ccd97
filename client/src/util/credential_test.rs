use super::*;

#[test]
fn secure_only_on_https() {
    assert!(secure_for_protocol("https:"));
    assert!(secure_for_protocol("HTTPS:"));
    assert!(!secure_for_protocol("http:"));
    assert!(!secure_for_protocol(""));
}

#[test]
fn credential_in_cookies_skips_empty_duplicates() {
    assert_eq!(credential_in_cookies("token=; token=abc").unwrap().as_str(), "abc");
    assert_eq!(credential_in_cookies("token=abc; token=").unwrap().as_str(), "abc");
    assert_eq!(credential_in_cookies("token=first; token=second").unwrap().as_str(), "first");
    assert!(credential_in_cookies("token=; token=").is_none());
    assert!(credential_in_cookies("theme=dark").is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_outside_browser_reads_nothing_and_ignores_writes() {
    let mut store = BrowserCookieStore;
    store.save(&Credential::new("abc").unwrap());
    assert!(store.read().is_none());
    assert!(store.read_tenant().is_none());
    store.remove();
    assert!(store.read().is_none());
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
#[test]
fn initial_session_outside_browser_is_signed_out() {
    assert!(!initial_session().is_authenticated());
}
