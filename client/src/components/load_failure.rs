//! Inline failure notice with a retry button.

use leptos::prelude::*;

#[component]
pub fn LoadFailure(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-failure" role="alert">
            <p class="load-failure__message">{message}</p>
            <button class="btn load-failure__retry" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
