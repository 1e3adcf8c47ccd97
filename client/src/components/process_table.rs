//! Searchable, paged process list for the records page.

use leptos::prelude::*;
use session::SessionContext;

use crate::components::load_failure::LoadFailure;
use crate::components::pager::Pager;
use crate::net::api;
use crate::net::types::Process;
use crate::util::gate::{Load, load_guarded};
use crate::util::table::{PROCESS_ROWS, format_timestamp, matches_query, page_slice, total_pages, truncate};

#[component]
pub fn ProcessTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let rows = RwSignal::new(Load::<Vec<Process>>::Loading);
    let attempt = RwSignal::new(0_u32);
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);

    Effect::new(move || {
        attempt.track();
        load_guarded(session, rows, |authorization| async move { api::list_processes(&authorization).await });
    });

    let filtered = Memo::new(move |_| {
        let needle = query.get();
        rows.with(|state| {
            state
                .ready()
                .map(|all| {
                    all.iter()
                        .filter(|p| matches_query(&needle, &[p.title.as_str(), p.description.as_str()]))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.with(Vec::len), PROCESS_ROWS));
    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    view! {
        <section class="record-table">
            <div class="record-table__toolbar">
                <h2>"Processes"</h2>
                <input
                    class="record-table__search"
                    type="search"
                    placeholder="Search processes..."
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
                                    <th>"Title"</th>
                                    <th>"Description"</th>
                                    <th>"Steps"</th>
                                    <th>"Last Updated"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    filtered.with(|all| {
                                        page_slice(all, page.get(), PROCESS_ROWS)
                                            .iter()
                                            .map(|p| {
                                                view! {
                                                    <tr>
                                                        <td>{truncate(&p.title, 30)}</td>
                                                        <td>{truncate(&p.description, 50)}</td>
                                                        <td>{p.steps.len()}</td>
                                                        <td>{p.updated_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                                        <td>
                                                            <a class="btn" href=format!("/dashboard/process/{}", p.id)>
                                                                "View"
                                                            </a>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </tbody>
                        </table>
                        <Show when=move || filtered.with(Vec::is_empty)>
                            <p class="record-table__empty">"No processes found."</p>
                        </Show>
                        <Pager page=page total=pages/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
