//! # Quill Infra
//!
//! Storage backings implementing the `quill-core` repository port:
//! a flat JSON file and (behind the `sqlite` feature) a single-table
//! SQLite database.

pub mod json;

#[cfg(feature = "sqlite")]
pub mod database;
