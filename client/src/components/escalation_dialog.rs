//! Support ticket form opened from an AI reply's escalation button.

use leptos::prelude::*;

use crate::state::chat::{ESCALATION_SENT, EscalationForm};

#[component]
pub fn EscalationDialog(on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(EscalationForm::default());
    let error = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(EscalationForm::validate) {
            Ok(()) => {
                error.set(None);
                sent.set(true);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let field = move |placeholder: &'static str, get: fn(&EscalationForm) -> &String, set: fn(&mut EscalationForm, String)| {
        view! {
            <input
                class="modal__input"
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal escalation" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>"Escalate Your Concern"</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <form class="modal__form" on:submit=on_submit>
                                {field("Customer Name", |f| &f.name, |f, v| f.name = v)}
                                {field("Customer Email", |f| &f.email, |f, v| f.email = v)}
                                {field("Customer Phone (optional)", |f| &f.phone, |f, v| f.phone = v)}
                                {field("Concern (e.g., billing issue)", |f| &f.concern, |f, v| f.concern = v)}
                                <textarea
                                    class="modal__input"
                                    placeholder="Additional description (optional)"
                                    prop:value=move || form.with(|f| f.description.clone())
                                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                                ></textarea>
                                <Show when=move || error.get().is_some()>
                                    <p class="modal__error">{move || error.get().unwrap_or_default()}</p>
                                </Show>
                                <div class="modal__actions">
                                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                                        "Cancel"
                                    </button>
                                    <button class="btn btn--primary" type="submit">
                                        "Submit"
                                    </button>
                                </div>
                            </form>
                        }
                    }
                >
                    <p class="escalation__sent">{ESCALATION_SENT}</p>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </Show>
            </div>
        </div>
    }
}
