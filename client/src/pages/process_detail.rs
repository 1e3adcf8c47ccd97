//! View, edit and delete one process.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use session::SessionContext;

use crate::components::load_failure::LoadFailure;
use crate::components::steps_editor::StepsEditor;
use crate::net::api;
use crate::net::types::{Process, ProcessDraft};
use crate::util::browser::confirm;
use crate::util::gate::{Load, authorization, load_guarded, settle_failure};
use crate::util::table::format_timestamp;

const LOAD_FAILED: &str = "Failed to load process details.";
const UPDATE_FAILED: &str = "Failed to update process. Please try again.";
const UPDATED: &str = "Process updated successfully!";
const DELETE_FAILED: &str = "Failed to delete process.";
const DELETE_CONFIRM: &str = "Are you sure you want to delete this process?";

#[component]
pub fn ProcessDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let process = RwSignal::new(Load::<Process>::Loading);
    let attempt = RwSignal::new(0_u32);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let steps = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        attempt.track();
        let id = id();
        load_guarded(session, process, move |authorization| async move {
            api::get_process(&authorization, &id).await
        });
    });

    let fill = move |p: &Process| {
        let draft = ProcessDraft::from(p);
        title.set(draft.title);
        description.set(draft.description);
        steps.set(if draft.steps.is_empty() { vec![String::new()] } else { draft.steps });
    };

    Effect::new(move || {
        if let Some(loaded) = process.with(|state| state.ready().cloned()) {
            fill(&loaded);
        }
    });

    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let candidate = ProcessDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            steps: steps.get_untracked(),
        };
        let draft = match candidate.validated() {
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
            match api::update_process(&auth, &id, &draft).await {
                Ok(updated) => {
                    process.set(Load::Ready(updated));
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

    let navigate_after_delete = navigate.clone();
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
            let navigate = navigate_after_delete.clone();
            leptos::task::spawn_local(async move {
                match api::delete_process(&auth, &id).await {
                    Ok(()) => navigate("/dashboard/records", NavigateOptions::default()),
                    Err(e) => error.set(settle_failure(session, &e, DELETE_FAILED)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, id, &navigate_after_delete);
        }
    };

    let stamps = move || {
        process.with(|state| {
            state
                .ready()
                .map(|p| {
                    (
                        p.created_at.as_deref().map(format_timestamp).unwrap_or_default(),
                        p.updated_at.as_deref().map(format_timestamp).unwrap_or_default(),
                    )
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="editor">
            <h2>"Edit Process"</h2>
            {move || match process.with(|state| state.failure().map(str::to_owned)) {
                Some(_) => view! { <LoadFailure message=LOAD_FAILED on_retry=retry/> }.into_any(),
                None if process.with(|state| state.ready().is_none()) => view! { <p>"Loading..."</p> }.into_any(),
                None => ().into_any(),
            }}
            <Show when=move || process.with(|state| state.ready().is_some())>
                <form class="editor__form" on:submit=on_save>
                    <input
                        class="editor__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="editor__input editor__input--multiline"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <p class="editor__meta">{move || format!("Created At: {}", stamps().0)}</p>
                    <p class="editor__meta">{move || format!("Last Updated: {}", stamps().1)}</p>
                    <StepsEditor steps=steps error=error/>
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
                        <a class="btn" href="/dashboard/records">
                            "Cancel"
                        </a>
                    </div>
                </form>
            </Show>
        </div>
    }
}
