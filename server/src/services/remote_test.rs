use super::*;

// =============================================================================
// endpoint
// =============================================================================

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://api", "/tenant/login"), "http://api/tenant/login");
    assert_eq!(endpoint("http://api/", "/tenant/login"), "http://api/tenant/login");
    assert_eq!(endpoint("http://api", "api/admin/register"), "http://api/api/admin/register");
}

#[test]
fn client_trims_base_url() {
    let remote = HttpRemote::new("http://api.test/", 5).unwrap();
    assert_eq!(remote.endpoint(LOGIN_PATH), "http://api.test/tenant/login");
    assert_eq!(remote.endpoint(REGISTER_PATH), "http://api.test/api/admin/register");
}

// =============================================================================
// parse_grant
// =============================================================================

#[test]
fn parse_grant_reads_token_and_tenant() {
    let grant = parse_grant(r#"{"token":"abc","tenant":{"_id":"t1","slug":"acme","name":"Acme"}}"#).unwrap();
    assert_eq!(grant.token, "abc");
    let tenant = grant.tenant.unwrap();
    assert_eq!(tenant.id, "t1");
    assert_eq!(tenant.slug, "acme");
}

#[test]
fn parse_grant_allows_missing_tenant() {
    let grant = parse_grant(r#"{"token":"abc"}"#).unwrap();
    assert!(grant.tenant.is_none());
}

#[test]
fn parse_grant_rejects_blank_token() {
    assert!(matches!(parse_grant(r#"{"token":"  "}"#), Err(ApiError::Decode(_))));
}

#[test]
fn parse_grant_rejects_malformed_json() {
    assert!(matches!(parse_grant("not json"), Err(ApiError::Decode(_))));
    assert!(matches!(parse_grant(r#"{"tenant":null}"#), Err(ApiError::Decode(_))));
}

// =============================================================================
// transport
// =============================================================================

#[tokio::test]
async fn unreachable_remote_is_a_network_error() {
    let remote = HttpRemote::new("http://127.0.0.1:9", 1).unwrap();
    let request = LoginRequest { email: "a@b.c".into(), password: "pw".into() };
    let err = remote.login(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}
