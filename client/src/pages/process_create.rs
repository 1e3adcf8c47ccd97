//! New process form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::SessionContext;

use crate::components::steps_editor::StepsEditor;
use crate::net::types::ProcessDraft;
use crate::util::gate::{authorization, settle_failure};

const SAVE_FAILED: &str = "Failed to save the process. Please try again.";

#[component]
pub fn ProcessCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let navigate = use_navigate();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let steps = RwSignal::new(vec![String::new()]);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_back = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
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
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_process(&auth, &draft).await {
                    Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                    Err(e) => error.set(settle_failure(session, &e, SAVE_FAILED)),
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
            <h2>"Create New Process"</h2>
            <form class="editor__form" on:submit=on_submit>
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
                <StepsEditor steps=steps error=error/>
                <Show when=move || error.get().is_some()>
                    <p class="editor__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="editor__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Process" }}
                    </button>
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| navigate_back("/dashboard", NavigateOptions::default())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
