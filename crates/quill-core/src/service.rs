//! Blog service - orchestration between the HTTP layer and the record store.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::BlogPost;
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Listing order for the front page.
///
/// The default is newest first; the direction is a deployment choice, not
/// something callers decide per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest-first" => Ok(ListOrder::NewestFirst),
            "oldest-first" => Ok(ListOrder::OldestFirst),
            other => Err(format!("unknown list order: {other}")),
        }
    }
}

/// Orchestrates record-store operations per request.
///
/// Absence of a post is reported as `None`; callers redirect to the
/// listing instead of surfacing an error.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// All posts, sorted by timestamp string.
    ///
    /// The stable sort keeps storage order for posts stamped within the
    /// same second.
    pub async fn list_posts(&self, order: ListOrder) -> Result<Vec<BlogPost>, RepoError> {
        let mut posts = self.posts.list_all().await?;
        match order {
            ListOrder::NewestFirst => posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            ListOrder::OldestFirst => posts.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        }
        Ok(posts)
    }

    pub async fn get_post(&self, id: i64) -> Result<Option<BlogPost>, RepoError> {
        self.posts.find_by_id(id).await
    }

    pub async fn create_post(&self, title: String, content: String) -> Result<BlogPost, RepoError> {
        self.posts.insert(title, content).await
    }

    /// `None` means the id was absent and nothing was written.
    pub async fn edit_post(
        &self,
        id: i64,
        title: String,
        content: String,
    ) -> Result<Option<BlogPost>, RepoError> {
        self.posts.update(id, title, content).await
    }

    /// Idempotent: removing an absent id succeeds.
    pub async fn remove_post(&self, id: i64) -> Result<(), RepoError> {
        self.posts.delete(id).await
    }
}
