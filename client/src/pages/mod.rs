//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`home`, `chat`) render without a session. Everything else is
//! mounted under the dashboard layout, which installs the in-page gate; those
//! pages only wire their own data loads and mutations.

pub mod announcement_create;
pub mod announcement_detail;
pub mod chat;
pub mod dashboard;
pub mod faq_create;
pub mod home;
pub mod process_create;
pub mod process_detail;
pub mod records;
pub mod share;
