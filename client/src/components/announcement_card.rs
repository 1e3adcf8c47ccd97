//! Announcement summary with edit and delete actions.

use leptos::prelude::*;

use crate::net::types::Announcement;
use crate::util::table::format_timestamp;

#[component]
pub fn AnnouncementCard(announcement: Announcement, on_delete: Callback<String>) -> impl IntoView {
    let id = announcement.id.clone();
    let posted = announcement.created_at.as_deref().map(format_timestamp).unwrap_or_default();

    view! {
        <article class="announcement-card">
            <h3 class="announcement-card__title">{announcement.title}</h3>
            <p class="announcement-card__details">{announcement.details}</p>
            <p class="announcement-card__meta">
                {format!("Posted by {}", announcement.posted_by)}
                <span class="announcement-card__date">{posted}</span>
            </p>
            <div class="announcement-card__actions">
                <a class="btn" href=format!("/dashboard/announcement/{}", announcement.id)>
                    "Edit"
                </a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
