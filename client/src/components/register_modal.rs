//! Account registration dialog.

use leptos::prelude::*;
use session::RegisterForm;

pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

#[component]
pub fn RegisterModal(on_close: Callback<()>, on_open_login: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let submitted = form.get_untracked();
        if let Err(message) = submitted.validate() {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&submitted).await {
                Ok(()) => on_open_login.run(()),
                Err(e) => error.set(Some(e.user_message(REGISTER_FAILED))),
            }
            busy.set(false);
        });
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&RegisterForm) -> &String, set: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="modal__input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>"Register"</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <p class="modal__subtitle">"Create an account to get started"</p>
                <form class="modal__form" on:submit=on_submit>
                    {field("First Name", "text", |f| &f.first_name, |f, v| f.first_name = v)}
                    {field("Last Name", "text", |f| &f.last_name, |f, v| f.last_name = v)}
                    {field("Username", "text", |f| &f.username, |f, v| f.username = v)}
                    {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                    {field("Confirm Password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                    <Show when=move || error.get().is_some()>
                        <p class="modal__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="modal__switch">
                    "Already have an account? "
                    <button class="modal__link" on:click=move |_| on_open_login.run(())>
                        "Login here"
                    </button>
                </p>
            </div>
        </div>
    }
}
