//! Record browser with one tab per record kind.

use leptos::prelude::*;

use crate::components::announcement_table::AnnouncementTable;
use crate::components::chat_table::ChatTable;
use crate::components::faq_table::FaqTable;
use crate::components::process_table::ProcessTable;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordTab {
    #[default]
    Processes,
    Announcements,
    Faqs,
    Chats,
}

impl RecordTab {
    pub const ALL: [Self; 4] = [Self::Processes, Self::Announcements, Self::Faqs, Self::Chats];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Processes => "Processes",
            Self::Announcements => "Announcements",
            Self::Faqs => "FAQs",
            Self::Chats => "Chats",
        }
    }
}

#[component]
pub fn RecordsPage() -> impl IntoView {
    let tab = RwSignal::new(RecordTab::default());

    view! {
        <div class="records">
            <div class="records__tabs" role="tablist">
                {RecordTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                role="tab"
                                class=move || {
                                    if tab.get() == t { "records__tab records__tab--active" } else { "records__tab" }
                                }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <a class="btn records__new" href="/dashboard/process">
                    "+ New Process"
                </a>
            </div>
            {move || match tab.get() {
                RecordTab::Processes => view! { <ProcessTable/> }.into_any(),
                RecordTab::Announcements => view! { <AnnouncementTable/> }.into_any(),
                RecordTab::Faqs => view! { <FaqTable/> }.into_any(),
                RecordTab::Chats => view! { <ChatTable/> }.into_any(),
            }}
        </div>
    }
}
