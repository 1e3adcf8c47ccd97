//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (cookies, localStorage, build-time endpoints) live here so
//! pages stay declarative and the pure parts stay testable on the host.

pub mod browser;
pub mod config;
pub mod credential;
pub mod dark_mode;
pub mod gate;
pub mod table;
pub mod transcript;
