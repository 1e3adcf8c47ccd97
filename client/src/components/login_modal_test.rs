use super::*;

#[test]
fn rejected_credentials_show_generic_message() {
    assert_eq!(login_error_message(&ApiError::Unauthorized { status: 401 }), INVALID_LOGIN);
    assert_eq!(login_error_message(&ApiError::Unauthorized { status: 403 }), INVALID_LOGIN);
}

#[test]
fn server_message_is_shown_when_present() {
    let err = ApiError::from_status(429, r#"{"error":"Too many attempts"}"#);
    assert_eq!(login_error_message(&err), "Too many attempts");
}

#[test]
fn transport_failures_fall_back() {
    assert_eq!(login_error_message(&ApiError::Network("offline".into())), LOGIN_FAILED);
    assert_eq!(login_error_message(&ApiError::from_status(500, "")), LOGIN_FAILED);
}
