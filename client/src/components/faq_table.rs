//! Tenant FAQ list for the records page.

use leptos::prelude::*;
use session::SessionContext;

use crate::components::load_failure::LoadFailure;
use crate::components::pager::Pager;
use crate::net::api;
use crate::net::types::{Faq, TENANT_REQUIRED};
use crate::util::gate::{Load, load_guarded};
use crate::util::table::{FAQ_ROWS, format_timestamp, matches_query, page_slice, total_pages, truncate};

#[component]
pub fn FaqTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let rows = RwSignal::new(Load::<Vec<Faq>>::Loading);
    let attempt = RwSignal::new(0_u32);
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);

    Effect::new(move || {
        attempt.track();
        // FAQs are tenant-scoped; without a tenant there is nothing to ask for.
        let Some(tenant_id) = session.with_untracked(|ctx| ctx.tenant_id().map(str::to_owned)) else {
            rows.set(Load::Failed(TENANT_REQUIRED.to_owned()));
            return;
        };
        load_guarded(session, rows, move |authorization| async move {
            api::list_faqs(&authorization, &tenant_id).await
        });
    });

    let filtered = Memo::new(move |_| {
        let needle = query.get();
        rows.with(|state| {
            state
                .ready()
                .map(|all| {
                    all.iter()
                        .filter(|f| matches_query(&needle, &[f.question.as_str(), f.answer.as_str()]))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.with(Vec::len), FAQ_ROWS));
    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    view! {
        <section class="record-table">
            <div class="record-table__toolbar">
                <h2>"FAQs"</h2>
                <input
                    class="record-table__search"
                    type="search"
                    placeholder="Search FAQs..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
            </div>
            {move || match rows.with(|state| state.failure().map(str::to_owned)) {
                Some(message) => view! { <LoadFailure message=message on_retry=retry/> }.into_any(),
                None if rows.with(|state| state.ready().is_none()) => {
                    view! { <p class="record-table__status">"Loading..."</p> }.into_any()
                }
                None => {
                    view! {
                        <table class="record-table__table">
                            <thead>
                                <tr>
                                    <th>"Question"</th>
                                    <th>"Answer"</th>
                                    <th>"Created At"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    filtered.with(|all| {
                                        page_slice(all, page.get(), FAQ_ROWS)
                                            .iter()
                                            .map(|f| {
                                                view! {
                                                    <tr>
                                                        <td title=f.question.clone()>{truncate(&f.question, 20)}</td>
                                                        <td title=f.answer.clone()>{truncate(&f.answer, 50)}</td>
                                                        <td>{f.created_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </tbody>
                        </table>
                        <Show when=move || filtered.with(Vec::is_empty)>
                            <p class="record-table__empty">"No FAQs found."</p>
                        </Show>
                        <Pager page=page total=pages/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
