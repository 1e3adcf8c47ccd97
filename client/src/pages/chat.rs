//! Public support chat for one tenant, reached through a shared link.
//!
//! SYSTEM CONTEXT
//! ==============
//! No session is involved: the tenant slug in the URL selects the assistant.
//! AI replies render as sanitized markdown; a reply offering escalation
//! carries a button that opens the ticket form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::escalation_dialog::EscalationDialog;
use crate::net::types::ChatRole;
use crate::state::chat::ChatState;
use crate::util::transcript::render_markdown_html;

#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());
    let chat = RwSignal::new(ChatState::default());
    let draft = RwSignal::new(String::new());
    let escalating = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = chat.try_update(|c| c.begin_turn(&draft.get_untracked())).flatten() else {
            return;
        };
        draft.set(String::new());
        let slug = slug();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::ask_chat(&slug, &request).await {
                Ok(response) => chat.update(|c| c.complete_turn(response)),
                Err(e) => {
                    log::warn!("support chat request failed: {e}");
                    chat.update(ChatState::fail_turn);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slug, request);
        }
    };

    let on_transcript_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if crate::util::browser::click_hits(&ev, "[data-escalate]") {
                ev.prevent_default();
                escalating.set(true);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="chat">
            <header class="chat__header">
                <h1>"Ask our assistant"</h1>
            </header>
            <div class="chat__transcript" on:click=on_transcript_click>
                <For
                    each=move || chat.with(|c| c.messages.clone())
                    key=|message| message.id
                    children=move |message| {
                        match message.role {
                            ChatRole::User => {
                                view! { <div class="chat__message chat__message--user">{message.content}</div> }
                                    .into_any()
                            }
                            ChatRole::Ai => {
                                view! {
                                    <div
                                        class="chat__message chat__message--ai"
                                        inner_html=render_markdown_html(&message.content)
                                    ></div>
                                }
                                    .into_any()
                            }
                        }
                    }
                />
                <Show when=move || chat.with(|c| c.loading)>
                    <div class="chat__message chat__message--ai chat__message--pending">"..."</div>
                </Show>
            </div>
            <Show when=move || chat.with(|c| c.error.is_some())>
                <p class="chat__error">{move || chat.with(|c| c.error.clone().unwrap_or_default())}</p>
            </Show>
            <form class="chat__composer" on:submit=on_send>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || chat.with(|c| c.loading)>
                    "Send"
                </button>
            </form>
            <Show when=move || escalating.get()>
                <EscalationDialog on_close=Callback::new(move |()| escalating.set(false))/>
            </Show>
        </div>
    }
}
