//! Good/bad response totals for the dashboard.

use leptos::prelude::*;

use crate::net::types::ResponseStats;

#[component]
pub fn StatsCard(stats: ResponseStats) -> impl IntoView {
    view! {
        <section class="stats-card">
            <h3 class="stats-card__title">"Response Statistics"</h3>
            <p class="stats-card__row stats-card__row--good">
                {format!("Good Responses: {} ({})", stats.good_responses, stats.good_percentage)}
            </p>
            <p class="stats-card__row stats-card__row--bad">
                {format!("Bad Responses: {} ({})", stats.bad_responses, stats.bad_percentage)}
            </p>
            <p class="stats-card__row">{format!("Total Responses: {}", stats.total_responses)}</p>
        </section>
    }
}
