//! # Quill Shared
//!
//! Transport-facing types shared between the web server and any future
//! client or tooling. No framework dependencies here.

pub mod dto;

pub use dto::PostForm;
