//! Dashboard home: response statistics, response counts over time and the
//! current announcements.

use leptos::prelude::*;
use session::SessionContext;

use crate::components::announcement_card::AnnouncementCard;
use crate::components::load_failure::LoadFailure;
use crate::components::stats_card::StatsCard;
use crate::net::api;
use crate::net::types::{Announcement, ResponseCount, ResponseStats, TimeRange};
use crate::util::browser::confirm;
use crate::util::gate::{Load, authorization, load_guarded, settle_failure};

const DELETE_CONFIRM: &str = "Are you sure you want to delete this announcement?";
const DELETE_FAILED: &str = "Failed to delete announcement.";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionContext>>();
    let stats = RwSignal::new(Load::<ResponseStats>::Loading);
    let counts = RwSignal::new(Load::<Vec<ResponseCount>>::Loading);
    let announcements = RwSignal::new(Load::<Vec<Announcement>>::Loading);
    let range = RwSignal::new(TimeRange::default());
    let attempt = RwSignal::new(0_u32);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        attempt.track();
        load_guarded(session, stats, |authorization| async move { api::response_stats(&authorization).await });
        load_guarded(session, announcements, |authorization| async move {
            api::list_announcements(&authorization).await
        });
    });

    Effect::new(move || {
        attempt.track();
        let selected = range.get();
        load_guarded(session, counts, move |authorization| async move {
            api::response_counts(&authorization, selected).await
        });
    });

    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    let on_delete = Callback::new(move |id: String| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        let Some(auth) = authorization(session) else {
            return;
        };
        notice.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_announcement(&auth, &id).await {
                Ok(()) => announcements.update(|state| {
                    if let Load::Ready(all) = state {
                        all.retain(|a| a.id != id);
                    }
                }),
                Err(e) => notice.set(settle_failure(session, &e, DELETE_FAILED)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, id);
        }
    });

    view! {
        <div class="dashboard-home">
            <section class="dashboard-home__stats">
                {move || match stats.get() {
                    Load::Loading => view! { <p>"Loading..."</p> }.into_any(),
                    Load::Failed(message) => view! { <LoadFailure message=message on_retry=retry/> }.into_any(),
                    Load::Ready(value) => view! { <StatsCard stats=value/> }.into_any(),
                }}
            </section>

            <section class="dashboard-home__counts">
                <div class="dashboard-home__counts-header">
                    <h3>"Responses Over Time"</h3>
                    <select
                        class="dashboard-home__range"
                        on:change=move |ev| {
                            if let Some(selected) = TimeRange::from_query(&event_target_value(&ev)) {
                                range.set(selected);
                            }
                        }
                    >
                        {TimeRange::ALL
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <option value=r.as_query() selected=move || { range.get() == r }>
                                        {r.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                {move || match counts.get() {
                    Load::Loading => view! { <p>"Loading..."</p> }.into_any(),
                    Load::Failed(message) => view! { <LoadFailure message=message on_retry=retry/> }.into_any(),
                    Load::Ready(series) => {
                        view! {
                            <table class="record-table__table">
                                <thead>
                                    <tr>
                                        <th>"Date"</th>
                                        <th>"Good"</th>
                                        <th>"Bad"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {series
                                        .into_iter()
                                        .map(|day| {
                                            view! {
                                                <tr>
                                                    <td>{day.date}</td>
                                                    <td>{day.good}</td>
                                                    <td>{day.bad}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="dashboard-home__announcements">
                <div class="dashboard-home__announcements-header">
                    <h3>"Announcements"</h3>
                    <a class="btn" href="/dashboard/announcement">
                        "+ New Announcement"
                    </a>
                </div>
                <Show when=move || notice.get().is_some()>
                    <p class="dashboard-home__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                {move || match announcements.get() {
                    Load::Loading => view! { <p>"Loading..."</p> }.into_any(),
                    Load::Failed(message) => view! { <LoadFailure message=message on_retry=retry/> }.into_any(),
                    Load::Ready(items) if items.is_empty() => view! { <p>"No announcements yet."</p> }.into_any(),
                    Load::Ready(items) => {
                        items
                            .into_iter()
                            .map(|a| view! { <AnnouncementCard announcement=a on_delete=on_delete/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
