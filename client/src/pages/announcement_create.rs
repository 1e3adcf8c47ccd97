//! New announcement form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::SessionContext;

use crate::net::types::AnnouncementDraft;
use crate::util::gate::{authorization, settle_failure};

const CREATE_FAILED: &str = "Failed to create announcement. Please try again.";

#[component]
pub fn AnnouncementCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let navigate = use_navigate();
    let form = RwSignal::new(AnnouncementDraft::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(AnnouncementDraft::validated) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(auth) = authorization(session) else {
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_announcement(&auth, &draft).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(e) => error.set(settle_failure(session, &e, CREATE_FAILED)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, draft, &navigate);
        }
    };

    view! {
        <div class="editor">
            <h2>"Create Announcement"</h2>
            <form class="editor__form" on:submit=on_submit>
                <label class="editor__label">"Title"</label>
                <input
                    class="editor__input"
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <label class="editor__label">"Details"</label>
                <textarea
                    class="editor__input editor__input--multiline"
                    prop:value=move || form.with(|f| f.details.clone())
                    on:input=move |ev| form.update(|f| f.details = event_target_value(&ev))
                ></textarea>
                <label class="editor__label">"Posted by"</label>
                <input
                    class="editor__input"
                    type="text"
                    prop:value=move || form.with(|f| f.posted_by.clone())
                    on:input=move |ev| form.update(|f| f.posted_by = event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="editor__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="editor__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Create Announcement" }}
                    </button>
                    <a class="btn" href="/dashboard">
                        "Cancel"
                    </a>
                </div>
            </form>
        </div>
    }
}
