//! SQLite record store built on SeaORM.

mod connections;
pub mod entity;
mod sqlite_repo;

pub use connections::{connect, DatabaseConfig};
pub use sqlite_repo::SqlitePostRepository;

#[cfg(test)]
mod tests;
