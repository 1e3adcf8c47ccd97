//! Service layer: outbound calls the console server makes on behalf of handlers.

pub mod remote;
