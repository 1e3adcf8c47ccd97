//! Client-side view state that outlives a single render.
//!
//! The session itself lives in an `RwSignal<SessionContext>` provided by the
//! app root; modules here hold page state that has real transition logic.

pub mod chat;
