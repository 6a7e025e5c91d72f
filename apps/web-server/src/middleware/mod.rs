//! Request/response plumbing shared by all handlers.

pub mod error;
