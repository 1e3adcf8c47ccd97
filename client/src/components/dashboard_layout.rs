//! Frame around every `/dashboard` page.
//!
//! Installs the in-page gate once for the whole protected subtree, then
//! renders the sidebar, breadcrumb and the matched child route.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;
use session::SessionContext;

use crate::components::breadcrumb::Breadcrumb;
use crate::components::sidebar::Sidebar;
use crate::util::gate::install_client_gate;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    install_client_gate(session, use_navigate());

    view! {
        <div class="dashboard">
            <Sidebar/>
            <div class="dashboard__main">
                <header class="dashboard__header">
                    <Breadcrumb/>
                </header>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
