//! Storage-layer error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Absence of a record is not an error; the port signals it with `Option`.
/// Every variant here is an I/O-class failure that is fatal for the
/// request that hit it.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store file access failed: {0}")]
    Io(String),

    #[error("Store (de)serialization failed: {0}")]
    Serialization(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
