use super::*;

#[test]
fn remote_prefixes_api_origin() {
    let url = remote("/api/processes/get");
    assert!(url.starts_with(api_base_url()));
    assert!(url.ends_with("/api/processes/get"));
    assert!(!url.contains("//api"));
}

#[test]
fn process_and_announcement_paths() {
    assert_eq!(process_path("getbyid", "p1"), "/api/processes/getbyid/p1");
    assert_eq!(process_path("delete", "p1"), "/api/processes/delete/p1");
    assert_eq!(announcement_path("update", "a9"), "/api/announcements/update/a9");
    assert_eq!(announcement_path("delete", "a9"), "/api/announcements/delete/a9");
}

#[test]
fn faqs_path_encodes_tenant_id() {
    assert_eq!(faqs_path("t1"), "/faqs/get?tenantId=t1");
    assert_eq!(faqs_path("a b&c"), "/faqs/get?tenantId=a+b%26c");
}

#[test]
fn chat_and_analytics_paths() {
    assert_eq!(chat_path("update-chat-status", "c1"), "/api/chat/update-chat-status/c1");
    assert_eq!(chat_path("delete", "c1"), "/api/chat/delete/c1");
    assert_eq!(response_count_path(TimeRange::Week), "/api/analytics/response-count?range=7d");
    assert_eq!(ask_path("acme"), "/ask/chat/acme");
}

#[test]
fn decode_failure_is_decode_error() {
    let err = decode::<Vec<Process>>("{not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_reads_list() {
    let processes: Vec<Process> = decode(r#"[{"_id":"p1","title":"T"}]"#).unwrap();
    assert_eq!(processes.len(), 1);
}
