//! Public landing page with the login and register dialogs.

use leptos::prelude::*;

use crate::components::login_modal::LoginModal;
use crate::components::register_modal::RegisterModal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    Closed,
    Login,
    Register,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let dialog = RwSignal::new(Dialog::Closed);
    let close = Callback::new(move |()| dialog.set(Dialog::Closed));
    let open_login = Callback::new(move |()| dialog.set(Dialog::Login));
    let open_register = Callback::new(move |()| dialog.set(Dialog::Register));

    view! {
        <div class="home">
            <nav class="home__nav">
                <h1 class="home__brand">"Process Manager"</h1>
                <button class="btn" on:click=move |_| open_login.run(())>
                    "Login"
                </button>
            </nav>
            <main class="home__hero">
                <h2>"Welcome to Process Manager"</h2>
                <a class="btn btn--primary" href="/dashboard">
                    "Go to Dashboard"
                </a>
            </main>
            {move || match dialog.get() {
                Dialog::Closed => ().into_any(),
                Dialog::Login => view! { <LoginModal on_close=close on_open_register=open_register/> }.into_any(),
                Dialog::Register => view! { <RegisterModal on_close=close on_open_login=open_login/> }.into_any(),
            }}
        </div>
    }
}
