use super::*;
use crate::store::MemoryStore;

fn tenant() -> TenantContext {
    TenantContext { id: "t-1".into(), slug: "acme".into(), name: "Acme".into() }
}

// =============================================================================
// Credential
// =============================================================================

#[test]
fn credential_rejects_empty_and_blank() {
    assert!(Credential::new("").is_none());
    assert!(Credential::new("   ").is_none());
}

#[test]
fn credential_keeps_raw_value() {
    let cred = Credential::new("abc").unwrap();
    assert_eq!(cred.as_str(), "abc");
}

#[test]
fn credential_bearer_format_is_exact() {
    let cred = Credential::new("tok.123").unwrap();
    assert_eq!(cred.bearer(), "Bearer tok.123");
}

#[test]
fn credential_debug_is_redacted() {
    let cred = Credential::new("very-secret").unwrap();
    let debug = format!("{cred:?}");
    assert!(!debug.contains("very-secret"));
}

// =============================================================================
// TenantContext serde
// =============================================================================

#[test]
fn tenant_deserializes_underscore_id() {
    let json = r#"{"_id":"65f0","slug":"acme","name":"Acme"}"#;
    let tenant: TenantContext = serde_json::from_str(json).unwrap();
    assert_eq!(tenant.id, "65f0");
    assert_eq!(tenant.slug, "acme");
}

#[test]
fn tenant_name_and_slug_default_to_empty() {
    let tenant: TenantContext = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
    assert_eq!(tenant.slug, "");
    assert_eq!(tenant.name, "");
}

// =============================================================================
// SessionContext lifecycle
// =============================================================================

#[test]
fn load_from_empty_store_is_anonymous() {
    let store = MemoryStore::new();
    let ctx = SessionContext::load(&store);
    assert!(!ctx.is_authenticated());
    assert!(ctx.tenant.is_none());
}

#[test]
fn establish_writes_credential_and_tenant() {
    let mut store = MemoryStore::new();
    let ctx = SessionContext::establish(&mut store, Credential::new("abc").unwrap(), Some(tenant()));
    assert!(ctx.is_authenticated());
    assert_eq!(store.read().unwrap().as_str(), "abc");
    assert_eq!(store.read_tenant(), Some(tenant()));
    assert_eq!(SessionContext::load(&store), ctx);
}

#[test]
fn teardown_clears_store_and_context() {
    let mut store = MemoryStore::new();
    let mut ctx = SessionContext::establish(&mut store, Credential::new("abc").unwrap(), Some(tenant()));
    ctx.teardown(&mut store);
    assert_eq!(ctx, SessionContext::default());
    assert!(store.read().is_none());
    assert!(store.read_tenant().is_none());
}

#[test]
fn tenant_accessors_skip_empty_values() {
    let ctx = SessionContext {
        credential: None,
        tenant: Some(TenantContext { id: String::new(), slug: String::new(), name: String::new() }),
    };
    assert_eq!(ctx.tenant_id(), None);
    assert_eq!(ctx.tenant_slug(), None);
}

#[test]
fn tenant_accessors_return_values() {
    let ctx = SessionContext { credential: None, tenant: Some(tenant()) };
    assert_eq!(ctx.tenant_id(), Some("t-1"));
    assert_eq!(ctx.tenant_slug(), Some("acme"));
}
