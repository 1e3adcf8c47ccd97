//! New FAQ form, scoped to the signed-in tenant.

use leptos::prelude::*;
use session::SessionContext;

use crate::net::types::FaqDraft;
use crate::util::gate::{authorization, settle_failure};

const CREATE_FAILED: &str = "Failed to create FAQ. Please try again.";
const CREATED: &str = "FAQ created successfully!";

#[component]
pub fn FaqCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let question = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let tenant_id = session.with_untracked(|ctx| ctx.tenant_id().map(str::to_owned));
        let draft = match FaqDraft::new(&question.get_untracked(), &answer.get_untracked(), tenant_id.as_deref()) {
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
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_faq(&auth, &draft).await {
                Ok(()) => {
                    notice.set(Some(CREATED));
                    question.set(String::new());
                    answer.set(String::new());
                }
                Err(e) => error.set(settle_failure(session, &e, CREATE_FAILED)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, draft);
        }
    };

    view! {
        <div class="editor">
            <h2>"Create New FAQ"</h2>
            <form class="editor__form" on:submit=on_submit>
                <input
                    class="editor__input"
                    type="text"
                    placeholder="Question"
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                />
                <textarea
                    class="editor__input editor__input--multiline"
                    placeholder="Answer"
                    prop:value=move || answer.get()
                    on:input=move |ev| answer.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || error.get().is_some()>
                    <p class="editor__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="editor__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <div class="editor__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save FAQ" }}
                    </button>
                    <a class="btn" href="/dashboard">
                        "Cancel"
                    </a>
                </div>
            </form>
        </div>
    }
}
