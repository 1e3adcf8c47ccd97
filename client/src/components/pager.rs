//! Previous/next controls for the record tables.

use leptos::prelude::*;

use crate::util::table::clamp_page;

/// `page` is 1-based; `total` is the page count of the filtered rows.
#[component]
pub fn Pager(page: RwSignal<usize>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let current = move || clamp_page(page.get(), total.get());
    let last = move || total.get().max(1);

    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || { current() <= 1 }
                on:click=move |_| page.set(current().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__status">{move || format!("Page {} of {}", current(), last())}</span>
            <button
                class="btn pager__next"
                disabled=move || { current() >= last() }
                on:click=move |_| page.set((current() + 1).min(last()))
            >
                "Next"
            </button>
        </div>
    }
}
