//! # Quill Core
//!
//! The domain layer of the Quill blog application.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::RepoError;
pub use service::{BlogService, ListOrder};
