//! Remote API record and request DTOs.
//!
//! DESIGN
//! ======
//! Field names follow the remote's JSON (`_id`, camelCase timestamps) via
//! serde renames; Rust-side names stay snake_case. Optional remote fields
//! default instead of failing the whole list decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// PROCESSES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Process {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Body for process create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProcessDraft {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub steps: Vec<String>,
}

pub const PROCESS_INCOMPLETE: &str = "Please provide a title and fill out all steps.";

impl ProcessDraft {
    /// Trimmed copy, or the inline message when the title or any step is blank.
    ///
    /// # Errors
    ///
    /// Returns [`PROCESS_INCOMPLETE`].
    pub fn validated(&self) -> Result<Self, &'static str> {
        if self.title.trim().is_empty() || self.steps.is_empty() || self.steps.iter().any(|s| s.trim().is_empty()) {
            return Err(PROCESS_INCOMPLETE);
        }
        Ok(Self {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            steps: self.steps.iter().map(|s| s.trim().to_owned()).collect(),
        })
    }
}

impl From<&Process> for ProcessDraft {
    fn from(process: &Process) -> Self {
        Self { title: process.title.clone(), description: process.description.clone(), steps: process.steps.clone() }
    }
}

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Announcement {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, rename = "postedBy")]
    pub posted_by: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnnouncementDraft {
    pub title: String,
    pub details: String,
    #[serde(rename = "postedBy")]
    pub posted_by: String,
}

pub const ANNOUNCEMENT_INCOMPLETE: &str = "Title, details and author are required.";

impl AnnouncementDraft {
    /// # Errors
    ///
    /// Returns [`ANNOUNCEMENT_INCOMPLETE`] when any field is blank.
    pub fn validated(&self) -> Result<Self, &'static str> {
        let draft = Self {
            title: self.title.trim().to_owned(),
            details: self.details.trim().to_owned(),
            posted_by: self.posted_by.trim().to_owned(),
        };
        if draft.title.is_empty() || draft.details.is_empty() || draft.posted_by.is_empty() {
            return Err(ANNOUNCEMENT_INCOMPLETE);
        }
        Ok(draft)
    }
}

impl From<&Announcement> for AnnouncementDraft {
    fn from(a: &Announcement) -> Self {
        Self { title: a.title.clone(), details: a.details.clone(), posted_by: a.posted_by.clone() }
    }
}

// =============================================================================
// FAQS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Faq {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "tenantId")]
    pub tenant_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
}

pub const FAQ_INCOMPLETE: &str = "Please provide both question and answer.";
pub const TENANT_REQUIRED: &str = "Tenant data is required.";

impl FaqDraft {
    /// Build a tenant-scoped FAQ body.
    ///
    /// # Errors
    ///
    /// Returns the inline message for a blank field or a missing tenant.
    pub fn new(question: &str, answer: &str, tenant_id: Option<&str>) -> Result<Self, &'static str> {
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(FAQ_INCOMPLETE);
        }
        let tenant_id = tenant_id.filter(|id| !id.is_empty()).ok_or(TENANT_REQUIRED)?;
        Ok(Self {
            question: question.trim().to_owned(),
            answer: answer.trim().to_owned(),
            tenant_id: tenant_id.to_owned(),
        })
    }
}

// =============================================================================
// CHAT RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub response: String,
    /// `None` until an admin rates the response.
    #[serde(default, rename = "isGoodResponse")]
    pub is_good_response: Option<bool>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Body of `PUT /api/chat/update-chat-status/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ChatAction {
    Like,
    Dislike,
}

// =============================================================================
// ANALYTICS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStats {
    #[serde(default)]
    pub total_responses: u64,
    #[serde(default)]
    pub good_responses: u64,
    #[serde(default)]
    pub bad_responses: u64,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub good_percentage: String,
    #[serde(default, deserialize_with = "deserialize_percentage")]
    pub bad_percentage: String,
}

/// One day of the response-count series.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseCount {
    pub date: String,
    #[serde(default)]
    pub good: u64,
    #[serde(default)]
    pub bad: u64,
}

/// Window for `GET /api/analytics/response-count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    Quarter,
    Month,
    Week,
}

impl TimeRange {
    pub const ALL: [Self; 3] = [Self::Quarter, Self::Month, Self::Week];

    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Quarter => "90d",
            Self::Month => "30d",
            Self::Week => "7d",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Quarter => "Last 3 months",
            Self::Month => "Last 30 days",
            Self::Week => "Last 7 days",
        }
    }

    #[must_use]
    pub fn from_query(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_query() == raw)
    }
}

/// The remote sends percentages either as `"42.5%"` strings or bare numbers.
fn deserialize_percentage<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => format!("{n}%"),
        _ => String::new(),
    })
}

// =============================================================================
// SUPPORT CHAT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub role: ChatRole,
    pub content: String,
}

/// Placeholder identity sent with the first message of a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl CustomerDetails {
    #[must_use]
    pub fn guest() -> Self {
        Self { name: "Guest".into(), email: "guest@example.com".into(), phone_number: "0000000000".into() }
    }
}

/// Body of `POST /ask/chat/{slug}`. Exactly one of `session_id` and
/// `customer_details` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub query: String,
    pub history: Vec<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_details: Option<CustomerDetails>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub session_id: Option<String>,
}
