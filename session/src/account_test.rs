use super::*;
use crate::credential::Credential;

fn form() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        username: "ada".into(),
        email: " ada@example.com ".into(),
        password: "hunter2".into(),
        confirm_password: "hunter2".into(),
    }
}

#[test]
fn validate_accepts_complete_form() {
    let req = form().validate().unwrap();
    assert_eq!(req.first_name, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, "hunter2");
}

#[test]
fn validate_requires_both_names() {
    let mut f = form();
    f.first_name = "  ".into();
    assert_eq!(f.validate(), Err(NAMES_REQUIRED));
    let mut f = form();
    f.last_name = String::new();
    assert_eq!(f.validate(), Err(NAMES_REQUIRED));
}

#[test]
fn validate_rejects_mismatched_passwords() {
    let mut f = form();
    f.confirm_password = "hunter3".into();
    assert_eq!(f.validate(), Err(PASSWORDS_DIFFER));
}

#[test]
fn register_request_serializes_camel_case_without_confirmation() {
    let json = serde_json::to_value(form().validate().unwrap()).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
    assert!(json.get("confirmPassword").is_none());
}

#[test]
fn register_form_reads_camel_case() {
    let json = r#"{"firstName":"A","lastName":"B","username":"u","email":"e","password":"p","confirmPassword":"p"}"#;
    let f: RegisterForm = serde_json::from_str(json).unwrap();
    assert_eq!(f.confirm_password, "p");
}

#[test]
fn login_grant_tenant_is_optional() {
    let grant: LoginGrant = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(grant.token, "abc");
    assert!(grant.tenant.is_none());
}

#[test]
fn login_grant_reads_tenant() {
    let grant: LoginGrant =
        serde_json::from_str(r#"{"token":"abc","tenant":{"_id":"t1","slug":"acme","name":"Acme"}}"#).unwrap();
    assert_eq!(grant.tenant.unwrap().slug, "acme");
}

#[test]
fn session_view_never_carries_the_token() {
    let ctx = SessionContext { credential: Credential::new("secret"), tenant: None };
    let view = SessionView::from(&ctx);
    assert!(view.authenticated);
    let json = serde_json::to_string(&view).unwrap();
    assert!(!json.contains("secret"));
}
