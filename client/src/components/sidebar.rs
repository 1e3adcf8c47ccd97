//! Dashboard navigation, theme toggle and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::{PUBLIC_ENTRY_PATH, SessionContext};

use crate::util::credential::BrowserCookieStore;
use crate::util::dark_mode::{self, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

pub const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        title: "Dashboard",
        items: &[
            NavItem { label: "Home", path: "/dashboard" },
            NavItem { label: "View Records", path: "/dashboard/records" },
            NavItem { label: "Generate URL", path: "/dashboard/url" },
        ],
    },
    NavGroup {
        title: "Create",
        items: &[
            NavItem { label: "FAQ", path: "/dashboard/faq" },
            NavItem { label: "Process", path: "/dashboard/process" },
            NavItem { label: "Announcement", path: "/dashboard/announcement" },
        ],
    },
];

/// Whether `item` is the page at `pathname`. Home is active only on the
/// dashboard root.
#[must_use]
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    pathname == item.path || (item.path != "/dashboard" && pathname.starts_with(&format!("{}/", item.path)))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let theme = RwSignal::new(Theme::Light);

    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        theme.set(preferred);
    });

    let on_logout = move |_| {
        let navigate = navigate.clone();
        let finish = move || {
            session.update(|ctx| ctx.teardown(&mut BrowserCookieStore));
            navigate(PUBLIC_ENTRY_PATH, NavigateOptions::default());
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout request failed: {e}");
            }
            finish();
        });
        #[cfg(not(feature = "hydrate"))]
        finish();
    };

    let tenant_name = move || session.with(|ctx| ctx.tenant.as_ref().map(|t| t.name.clone()).unwrap_or_default());

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <span class="sidebar__brand">"Process Manager"</span>
                <span class="sidebar__tenant">{tenant_name}</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <span class="sidebar__group-title">{group.title}</span>
                                {group
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <a
                                                class=move || {
                                                    if pathname.with(|path| is_active(item, path)) {
                                                        "sidebar__link sidebar__link--active"
                                                    } else {
                                                        "sidebar__link"
                                                    }
                                                }
                                                href=item.path
                                            >
                                                {item.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <button
                    class="btn sidebar__theme"
                    title="Toggle dark mode"
                    on:click=move |_| theme.set(dark_mode::toggle(theme.get_untracked()))
                >
                    {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
                </button>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;
