//! Shareable support chat link for the signed-in tenant.

use leptos::prelude::*;
use session::SessionContext;

use crate::util::browser::copy_text;
use crate::util::config::{public_base_url, share_url};

const NO_SLUG: &str = "No chat session found. Please start a chat first.";
const COPIED: &str = "Chat link copied to clipboard!";

#[component]
pub fn SharePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let copied = RwSignal::new(false);
    let link = move || session.with(|ctx| ctx.tenant_slug().map(|slug| share_url(public_base_url(), slug)));

    let on_copy = move |_| {
        if let Some(url) = link() {
            copied.set(copy_text(&url));
        }
    };

    view! {
        <div class="share">
            <h2>"Share Chatbot Link"</h2>
            {move || match link() {
                None => view! { <p class="share__empty">{NO_SLUG}</p> }.into_any(),
                Some(url) => {
                    view! {
                        <div class="share__link">
                            <input class="share__url" type="text" readonly=true prop:value=url.clone()/>
                            <button class="btn btn--primary" on:click=on_copy>
                                "Copy Link"
                            </button>
                            <a class="btn" href=url target="_blank" rel="noopener noreferrer">
                                "Open"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || copied.get()>
                <p class="share__copied">{COPIED}</p>
            </Show>
        </div>
    }
}
