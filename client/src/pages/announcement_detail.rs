//! View, edit and delete one announcement.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use session::SessionContext;

use crate::components::load_failure::LoadFailure;
use crate::net::api;
use crate::net::types::{Announcement, AnnouncementDraft};
use crate::util::browser::confirm;
use crate::util::gate::{Load, authorization, load_guarded, settle_failure};

const UPDATE_FAILED: &str = "Failed to update announcement. Please try again.";
const UPDATED: &str = "Announcement updated successfully!";
const DELETE_FAILED: &str = "Failed to delete announcement.";
const DELETE_CONFIRM: &str = "Are you sure you want to delete this announcement?";

#[component]
pub fn AnnouncementDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let announcement = RwSignal::new(Load::<Announcement>::Loading);
    let attempt = RwSignal::new(0_u32);
    let form = RwSignal::new(AnnouncementDraft::default());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        attempt.track();
        let id = id();
        load_guarded(session, announcement, move |authorization| async move {
            api::get_announcement(&authorization, &id).await
        });
    });

    Effect::new(move || {
        if let Some(draft) = announcement.with(|state| state.ready().map(AnnouncementDraft::from)) {
            form.set(draft);
        }
    });

    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
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
        let id = id();
        busy.set(true);
        error.set(None);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_announcement(&auth, &id, &draft).await {
                Ok(updated) => {
                    announcement.set(Load::Ready(updated));
                    notice.set(Some(UPDATED));
                }
                Err(e) => error.set(settle_failure(session, &e, UPDATE_FAILED)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, id, draft);
        }
    };

    let on_delete = move |_| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        let Some(auth) = authorization(session) else {
            return;
        };
        let id = id();
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::delete_announcement(&auth, &id).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(e) => error.set(settle_failure(session, &e, DELETE_FAILED)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, id, &navigate);
        }
    };

    view! {
        <div class="editor">
            <h2>"Edit Announcement"</h2>
            {move || match announcement.with(|state| state.failure().map(str::to_owned)) {
                Some(message) => view! { <LoadFailure message=message on_retry=retry/> }.into_any(),
                None if announcement.with(|state| state.ready().is_none()) => view! { <p>"Loading..."</p> }.into_any(),
                None => ().into_any(),
            }}
            <Show when=move || announcement.with(|state| state.ready().is_some())>
                <form class="editor__form" on:submit=on_save>
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
                    <Show when=move || notice.get().is_some()>
                        <p class="editor__notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="editor__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <button class="btn btn--danger" type="button" on:click=on_delete.clone()>
                            "Delete"
                        </button>
                        <a class="btn" href="/dashboard">
                            "Cancel"
                        </a>
                    </div>
                </form>
            </Show>
        </div>
    }
}
