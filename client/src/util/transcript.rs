//! Support-chat transcript rendering.
//!
//! AI replies are markdown. Raw HTML in a reply is dropped before rendering.
//! Links to the escalation sentinel become a button carrying
//! `data-escalate`, which the chat page turns into "open the escalation
//! form". `http`, `https` and `mailto` links open in a new tab; links with
//! any other target keep their text and lose the link.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use pulldown_cmark_escape::escape_href;

/// Link destination the assistant uses to offer a support ticket.
pub const ESCALATION_HREF: &str = "escalate://now";

/// Whether an AI reply offers escalation.
#[must_use]
pub fn contains_escalation(content: &str) -> bool {
    content.contains(ESCALATION_HREF)
}

/// Link schemes an AI reply may point at. Anything else renders as text.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Whether `dest` is an absolute URL with an allowed scheme.
fn is_safe_href(dest: &str) -> bool {
    dest.split_once(':').is_some_and(|(scheme, _)| {
        SAFE_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe))
    })
}

/// Render one AI reply to HTML.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Closing tag for each open link, innermost last. `None` marks a link
    // whose target was refused; its text is kept without a tag.
    let mut open_links: Vec<Option<&'static str>> = Vec::new();

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { dest_url, .. }) => {
            if dest_url.as_ref() == ESCALATION_HREF {
                open_links.push(Some("</button>"));
                Some(Event::Html(CowStr::Borrowed(
                    r#"<button type="button" class="chat__escalate" data-escalate="true">"#,
                )))
            } else if is_safe_href(&dest_url) {
                open_links.push(Some("</a>"));
                let mut href = String::new();
                let _ = escape_href(&mut href, &dest_url);
                let tag = format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">"#);
                Some(Event::Html(tag.into()))
            } else {
                open_links.push(None);
                None
            }
        }
        Event::End(TagEnd::Link) => open_links.pop().flatten().map(|close| Event::Html(CowStr::Borrowed(close))),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;
