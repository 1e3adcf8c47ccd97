//! Path trail shown above every dashboard page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

fn segment_label(segment: &str) -> &'static str {
    match segment {
        "dashboard" => "Dashboard",
        "records" => "Records",
        "process" => "Process",
        "announcement" => "Announcement",
        "faq" => "FAQ",
        "url" => "Share Link",
        _ => "Details",
    }
}

/// One crumb per path segment, each linking to its own prefix.
#[must_use]
pub fn breadcrumb_trail(path: &str) -> Vec<Crumb> {
    let mut href = String::new();
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            href.push('/');
            href.push_str(segment);
            Crumb { label: segment_label(segment).to_owned(), href: href.clone() }
        })
        .collect()
}

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            {move || {
                let trail = breadcrumb_trail(&location.pathname.get());
                let last = trail.len().saturating_sub(1);
                trail
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        if i == last {
                            view! { <span class="breadcrumb__current">{crumb.label}</span> }.into_any()
                        } else {
                            view! {
                                <a class="breadcrumb__link" href=crumb.href>{crumb.label}</a>
                                <span class="breadcrumb__sep">"/"</span>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
#[path = "breadcrumb_test.rs"]
mod breadcrumb_test;
