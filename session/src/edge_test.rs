use super::*;

const PROTECTED: &[&str] = &[
    "/dashboard",
    "/dashboard/",
    "/dashboard/records",
    "/dashboard/process/123",
    "/dashboard/announcement/abc/extra",
];

const PUBLIC: &[&str] = &["/", "/chat/acme", "/api/auth/login", "/pkg/client.wasm", "/dashboardx", "/healthz"];

#[test]
fn protected_paths_are_recognized() {
    for path in PROTECTED {
        assert!(is_protected(path), "{path} should be protected");
    }
}

#[test]
fn public_paths_are_not_protected() {
    for path in PUBLIC {
        assert!(!is_protected(path), "{path} should be public");
    }
}

#[test]
fn protected_without_cookie_redirects_to_entry() {
    for path in PROTECTED {
        assert_eq!(edge_decision(path, None), EdgeDecision::Redirect("/"), "{path}");
    }
}

#[test]
fn protected_with_empty_cookie_redirects() {
    assert_eq!(edge_decision("/dashboard", Some("")), EdgeDecision::Redirect("/"));
    assert_eq!(edge_decision("/dashboard", Some("  ")), EdgeDecision::Redirect("/"));
}

#[test]
fn protected_with_any_value_passes() {
    for value in ["abc", "x", "not-even-a-real-token", "expired.jwt.value"] {
        for path in PROTECTED {
            assert_eq!(edge_decision(path, Some(value)), EdgeDecision::Pass, "{path} {value}");
        }
    }
}

#[test]
fn public_paths_pass_regardless_of_cookie() {
    for path in PUBLIC {
        assert_eq!(edge_decision(path, None), EdgeDecision::Pass, "{path}");
        assert_eq!(edge_decision(path, Some("")), EdgeDecision::Pass, "{path}");
        assert_eq!(edge_decision(path, Some("abc")), EdgeDecision::Pass, "{path}");
    }
}
