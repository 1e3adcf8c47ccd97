//! Tenant login dialog on the home page.
//!
//! The console server performs the remote login and writes the session
//! cookies on the response; this dialog then reloads the session from those
//! cookies and enters the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{ApiError, LoginRequest, SessionContext};

use crate::util::credential::BrowserCookieStore;

pub const INVALID_LOGIN: &str = "Invalid email or password";
pub const LOGIN_FAILED: &str = "Server error";
const DASHBOARD_PATH: &str = "/dashboard";

/// Inline text for a failed login.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        return INVALID_LOGIN.to_owned();
    }
    err.user_message(LOGIN_FAILED)
}

#[component]
pub fn LoginModal(on_close: Callback<()>, on_open_register: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(_) => {
                        session.set(SessionContext::load(&BrowserCookieStore));
                        on_close.run(());
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(login_error_message(&e))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, &navigate);
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>"Tenant Login"</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <p class="modal__subtitle">"Sign in to access your department"</p>
                <form class="modal__form" on:submit=on_submit>
                    <input
                        class="modal__input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="modal__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="modal__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="modal__switch">
                    "Don't have an account? "
                    <button class="modal__link" on:click=move |_| on_open_register.run(())>
                        "Register here"
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;
