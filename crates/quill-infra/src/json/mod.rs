//! Flat-JSON-file record store.

mod store;

pub use store::JsonPostRepository;
