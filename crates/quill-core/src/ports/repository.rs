use async_trait::async_trait;

use crate::domain::BlogPost;
use crate::error::RepoError;

/// Record store for blog posts.
///
/// Implementations own id assignment and timestamp stamping so that every
/// backing is observably identical through this trait.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every stored record, in storage order. An empty store is `Ok(vec![])`.
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// The record with `id`, or `None` if no such record exists.
    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, RepoError>;

    /// Persist a new record with a fresh id and a current-time stamp.
    async fn insert(&self, title: String, content: String) -> Result<BlogPost, RepoError>;

    /// Replace title/content of the record with `id` and re-stamp it.
    /// Returns `None` (and writes nothing) when the id is absent.
    async fn update(
        &self,
        id: i64,
        title: String,
        content: String,
    ) -> Result<Option<BlogPost>, RepoError>;

    /// Remove the record with `id`. Deleting an absent id is a no-op.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
