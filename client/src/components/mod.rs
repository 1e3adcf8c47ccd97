//! Reusable UI pieces shared by the console pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from the `RwSignal<SessionContext>` context
//! and report user intent through `Callback` props. Record tables load their
//! own rows through the in-page gate so each records tab is self-contained.

pub mod announcement_card;
pub mod announcement_table;
pub mod breadcrumb;
pub mod chat_table;
pub mod dashboard_layout;
pub mod escalation_dialog;
pub mod faq_table;
pub mod load_failure;
pub mod login_modal;
pub mod pager;
pub mod process_table;
pub mod register_modal;
pub mod sidebar;
pub mod stats_card;
pub mod steps_editor;
