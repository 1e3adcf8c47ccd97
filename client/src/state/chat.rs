//! Support chat conversation state.
//!
//! DESIGN
//! ======
//! A turn is two steps: `begin_turn` records the user's message and builds the
//! request, `complete_turn`/`fail_turn` settles it. The first request of a
//! conversation carries guest customer details; once the remote hands back a
//! session id every later request carries that id instead.

use crate::net::types::{AskRequest, AskResponse, ChatRole, CustomerDetails, HistoryEntry};

pub const ASK_FAILED: &str = "Failed to fetch response. Try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub session_id: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    next_id: u64,
}

impl ChatState {
    fn push(&mut self, role: ChatRole, content: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, role, content });
    }

    /// Record a user message and build its request. Blank input and input
    /// sent while a reply is pending are ignored.
    pub fn begin_turn(&mut self, text: &str) -> Option<AskRequest> {
        let query = text.trim();
        if query.is_empty() || self.loading {
            return None;
        }
        let history = self
            .messages
            .iter()
            .map(|m| HistoryEntry { role: m.role, content: m.content.clone() })
            .collect();
        self.push(ChatRole::User, query.to_owned());
        self.loading = true;
        self.error = None;

        let customer_details = self.session_id.is_none().then(CustomerDetails::guest);
        Some(AskRequest { query: query.to_owned(), history, session_id: self.session_id.clone(), customer_details })
    }

    pub fn complete_turn(&mut self, response: AskResponse) {
        self.loading = false;
        if self.session_id.is_none() {
            self.session_id = response.session_id;
        }
        self.push(ChatRole::Ai, response.answer);
    }

    pub fn fail_turn(&mut self) {
        self.loading = false;
        self.error = Some(ASK_FAILED.to_owned());
    }
}

// =============================================================================
// ESCALATION
// =============================================================================

pub const ESCALATION_INCOMPLETE: &str = "Please provide your name, email and concern.";
pub const ESCALATION_SENT: &str = "Thanks! Our support team will reach out shortly.";

/// Ticket form opened from the escalation button in an AI reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscalationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub concern: String,
    pub description: String,
}

impl EscalationForm {
    /// Name, email and concern are required; phone and description are not.
    ///
    /// # Errors
    ///
    /// Returns the inline message when a required field is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        let required = [&self.name, &self.email, &self.concern];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ESCALATION_INCOMPLETE);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;
