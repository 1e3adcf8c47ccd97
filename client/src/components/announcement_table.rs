//! Announcement browser for the records page, one announcement per page.

use leptos::prelude::*;
use session::SessionContext;

use crate::components::load_failure::LoadFailure;
use crate::components::pager::Pager;
use crate::net::api;
use crate::net::types::Announcement;
use crate::util::gate::{Load, load_guarded};
use crate::util::table::{ANNOUNCEMENT_ROWS, format_timestamp, matches_query, page_slice, total_pages};

#[component]
pub fn AnnouncementTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let rows = RwSignal::new(Load::<Vec<Announcement>>::Loading);
    let attempt = RwSignal::new(0_u32);
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_usize);

    Effect::new(move || {
        attempt.track();
        load_guarded(session, rows, |authorization| async move { api::list_announcements(&authorization).await });
    });

    let filtered = Memo::new(move |_| {
        let needle = query.get();
        rows.with(|state| {
            state
                .ready()
                .map(|all| {
                    all.iter()
                        .filter(|a| matches_query(&needle, &[a.title.as_str(), a.details.as_str(), a.posted_by.as_str()]))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.with(Vec::len), ANNOUNCEMENT_ROWS));
    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    view! {
        <section class="record-table">
            <div class="record-table__toolbar">
                <h2>"Announcements"</h2>
                <input
                    class="record-table__search"
                    type="search"
                    placeholder="Search announcements..."
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
                                    <th>"Details"</th>
                                    <th>"Posted By"</th>
                                    <th>"Created At"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    filtered.with(|all| {
                                        page_slice(all, page.get(), ANNOUNCEMENT_ROWS)
                                            .iter()
                                            .map(|a| {
                                                view! {
                                                    <tr>
                                                        <td>{a.title.clone()}</td>
                                                        <td>{a.details.clone()}</td>
                                                        <td>{a.posted_by.clone()}</td>
                                                        <td>{a.created_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                                        <td>
                                                            <a class="btn" href=format!("/dashboard/announcement/{}", a.id)>
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
                            <p class="record-table__empty">"No announcements found."</p>
                        </Show>
                        <Pager page=page total=pages/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
