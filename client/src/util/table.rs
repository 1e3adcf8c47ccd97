//! Search, paging and cell formatting shared by the record tables.
//!
//! Pages are 1-based. The current page is always clamped into
//! `1..=max(total_pages, 1)` so a shrinking result set never strands the
//! view on an empty page.

pub const PROCESS_ROWS: usize = 5;
pub const FAQ_ROWS: usize = 5;
pub const CHAT_ROWS: usize = 10;
pub const ANNOUNCEMENT_ROWS: usize = 1;

/// Case-insensitive substring match of `query` against any of `fields`.
/// A blank query matches everything.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

#[must_use]
pub fn total_pages(rows: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    rows.div_ceil(rows_per_page)
}

#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Rows shown on `page` (clamped first).
#[must_use]
pub fn page_slice<T>(rows: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let page = clamp_page(page, total_pages(rows.len(), rows_per_page));
    let start = (page - 1).saturating_mul(rows_per_page).min(rows.len());
    let end = start.saturating_add(rows_per_page).min(rows.len());
    &rows[start..end]
}

/// First `max_chars` characters followed by `...` when longer.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`. Anything else is
/// shown unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let iso_like = bytes.len() >= 16 && bytes[4] == b'-' && bytes[7] == b'-' && bytes[10] == b'T' && bytes[13] == b':';
    if iso_like {
        format!("{} {}", &raw[..10], &raw[11..16])
    } else {
        raw.to_owned()
    }
}

// =============================================================================
// CHAT RATINGS
// =============================================================================

/// Chat table response-type filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatingFilter {
    #[default]
    All,
    Good,
    Bad,
}

impl RatingFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Good, Self::Bad];

    /// Unrated chats only pass `All`.
    #[must_use]
    pub fn accepts(self, is_good_response: Option<bool>) -> bool {
        match self {
            Self::All => true,
            Self::Good => is_good_response == Some(true),
            Self::Bad => is_good_response == Some(false),
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Good => "Good Responses",
            Self::Bad => "Bad Responses",
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == raw).unwrap_or_default()
    }
}

#[must_use]
pub fn rating_label(is_good_response: Option<bool>) -> &'static str {
    match is_good_response {
        None => "Pending",
        Some(true) => "Good",
        Some(false) => "Bad",
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
