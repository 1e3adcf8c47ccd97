//! Chat log moderation table: rate replies good or bad, delete logs.

use leptos::prelude::*;
use session::SessionContext;

use crate::components::load_failure::LoadFailure;
use crate::components::pager::Pager;
use crate::net::api;
use crate::net::types::{ChatAction, ChatRecord};
use crate::util::browser::confirm;
use crate::util::gate::{Load, authorization, load_guarded, settle_failure};
use crate::util::table::{
    CHAT_ROWS, RatingFilter, format_timestamp, matches_query, page_slice, rating_label, total_pages, truncate,
};

const RATE_FAILED: &str = "Failed to update chat status.";
const DELETE_FAILED: &str = "Failed to delete chat.";
const DELETE_CONFIRM: &str = "Are you sure you want to delete this chat?";

/// Record the moderator's verdict on one row.
pub fn apply_rating(rows: &mut [ChatRecord], id: &str, action: ChatAction) {
    if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
        row.is_good_response = Some(action == ChatAction::Like);
    }
}

#[component]
pub fn ChatTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let rows = RwSignal::new(Load::<Vec<ChatRecord>>::Loading);
    let attempt = RwSignal::new(0_u32);
    let query = RwSignal::new(String::new());
    let filter = RwSignal::new(RatingFilter::All);
    let page = RwSignal::new(1_usize);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        attempt.track();
        load_guarded(session, rows, |authorization| async move { api::list_chats(&authorization).await });
    });

    let filtered = Memo::new(move |_| {
        let needle = query.get();
        let rating = filter.get();
        rows.with(|state| {
            state
                .ready()
                .map(|all| {
                    all.iter()
                        .filter(|c| rating.accepts(c.is_good_response) && matches_query(&needle, &[c.query.as_str()]))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });
    let pages = Signal::derive(move || total_pages(filtered.with(Vec::len), CHAT_ROWS));
    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    let rate = move |id: String, action: ChatAction| {
        let Some(auth) = authorization(session) else {
            return;
        };
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::rate_chat(&auth, &id, action).await {
                Ok(()) => rows.update(|state| {
                    if let Load::Ready(all) = state {
                        apply_rating(all, &id, action);
                    }
                }),
                Err(e) => notice.set(settle_failure(session, &e, RATE_FAILED)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, id, action);
        }
    };

    let delete = move |id: String| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        let Some(auth) = authorization(session) else {
            return;
        };
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_chat(&auth, &id).await {
                Ok(()) => rows.update(|state| {
                    if let Load::Ready(all) = state {
                        all.retain(|row| row.id != id);
                    }
                }),
                Err(e) => notice.set(settle_failure(session, &e, DELETE_FAILED)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, id);
        }
    };

    view! {
        <section class="record-table">
            <div class="record-table__toolbar">
                <h2>"Chat Logs"</h2>
                <input
                    class="record-table__search"
                    type="search"
                    placeholder="Search queries..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <select
                    class="record-table__filter"
                    on:change=move |ev| {
                        filter.set(RatingFilter::from_value(&event_target_value(&ev)));
                        page.set(1);
                    }
                >
                    {RatingFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f.value() selected=move || { filter.get() == f }>
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || notice.get().is_some()>
                <p class="record-table__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
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
                                    <th>"Query"</th>
                                    <th>"Response"</th>
                                    <th>"Response Type"</th>
                                    <th>"Created At"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    filtered.with(|all| {
                                        page_slice(all, page.get(), CHAT_ROWS)
                                            .iter()
                                            .map(|c| {
                                                let verdict = c.is_good_response;
                                                let (like_id, dislike_id, delete_id) = (c.id.clone(), c.id.clone(), c.id.clone());
                                                view! {
                                                    <tr>
                                                        <td title=c.query.clone()>{truncate(&c.query, 30)}</td>
                                                        <td title=c.response.clone()>{truncate(&c.response, 50)}</td>
                                                        <td>{rating_label(verdict)}</td>
                                                        <td>{c.created_at.as_deref().map(format_timestamp).unwrap_or_default()}</td>
                                                        <td class="record-table__actions">
                                                            <button
                                                                class="btn btn--good"
                                                                disabled={verdict == Some(true)}
                                                                on:click=move |_| rate(like_id.clone(), ChatAction::Like)
                                                            >
                                                                "Good"
                                                            </button>
                                                            <button
                                                                class="btn btn--bad"
                                                                disabled={verdict == Some(false)}
                                                                on:click=move |_| rate(dislike_id.clone(), ChatAction::Dislike)
                                                            >
                                                                "Bad"
                                                            </button>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| delete(delete_id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
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
                            <p class="record-table__empty">"No chats found."</p>
                        </Show>
                        <Pager page=page total=pages/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
#[path = "chat_table_test.rs"]
mod chat_table_test;
