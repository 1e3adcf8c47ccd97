use super::*;

#[test]
fn dashboard_root_is_single_crumb() {
    assert_eq!(breadcrumb_trail("/dashboard"), vec![Crumb { label: "Dashboard".into(), href: "/dashboard".into() }]);
}

#[test]
fn nested_paths_link_each_prefix() {
    let trail = breadcrumb_trail("/dashboard/process/p-42");
    let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
    let hrefs: Vec<&str> = trail.iter().map(|c| c.href.as_str()).collect();
    assert_eq!(labels, ["Dashboard", "Process", "Details"]);
    assert_eq!(hrefs, ["/dashboard", "/dashboard/process", "/dashboard/process/p-42"]);
}

#[test]
fn trailing_slash_adds_nothing() {
    assert_eq!(breadcrumb_trail("/dashboard/url/").len(), 2);
    assert_eq!(breadcrumb_trail("/dashboard/url/")[1].label, "Share Link");
}
