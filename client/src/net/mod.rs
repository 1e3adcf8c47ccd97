//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls to the console server and the remote API, and
//! `types` defines the remote's record and request schema.

pub mod api;
pub mod types;
