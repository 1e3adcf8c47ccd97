//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::pages::{
    announcement_create::AnnouncementCreatePage, announcement_detail::AnnouncementDetailPage, chat::ChatPage,
    dashboard::DashboardPage, faq_create::FaqCreatePage, home::HomePage, process_create::ProcessCreatePage,
    process_detail::ProcessDetailPage, records::RecordsPage, share::SharePage,
};
use crate::util::credential::initial_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The session signal starts from the request cookies during SSR and from
/// `document.cookie` in the browser, so both renders agree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(initial_session()));

    view! {
        <Stylesheet id="leptos" href="/pkg/console.css"/>
        <Title text="Process Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("chat"), ParamSegment("slug")) view=ChatPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("records") view=RecordsPage/>
                    <Route path=StaticSegment("process") view=ProcessCreatePage/>
                    <Route path=(StaticSegment("process"), ParamSegment("id")) view=ProcessDetailPage/>
                    <Route path=StaticSegment("announcement") view=AnnouncementCreatePage/>
                    <Route path=(StaticSegment("announcement"), ParamSegment("id")) view=AnnouncementDetailPage/>
                    <Route path=StaticSegment("faq") view=FaqCreatePage/>
                    <Route path=StaticSegment("url") view=SharePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
