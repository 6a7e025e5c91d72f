//! JSON-file implementation of the post repository.
//!
//! The whole collection lives in one JSON document that is rewritten on
//! every mutation. A missing file reads as an empty store, so first use
//! needs no setup. There is no cross-process locking: a writer in another
//! process can still overwrite this one's rewrite.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quill_core::domain::{now_stamp, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

pub struct JsonPostRepository {
    path: PathBuf,
    /// Held for the whole load-modify-rewrite cycle so concurrent requests
    /// in this process cannot tear the file.
    file_lock: Mutex<()>,
}

impl JsonPostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<BlogPost>, RepoError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| RepoError::Serialization(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RepoError::Io(e.to_string())),
        }
    }

    async fn save(&self, posts: &[BlogPost]) -> Result<(), RepoError> {
        let bytes =
            serde_json::to_vec_pretty(posts).map_err(|e| RepoError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| RepoError::Io(e.to_string()))
    }

    /// Ids are never reused: the successor of the highest id ever still
    /// present, not the record count.
    fn next_id(posts: &[BlogPost]) -> i64 {
        posts.iter().map(|post| post.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl PostRepository for JsonPostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let _guard = self.file_lock.lock().await;
        self.load().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, RepoError> {
        let _guard = self.file_lock.lock().await;
        let posts = self.load().await?;
        Ok(posts.into_iter().find(|post| post.id == id))
    }

    async fn insert(&self, title: String, content: String) -> Result<BlogPost, RepoError> {
        let _guard = self.file_lock.lock().await;
        let mut posts = self.load().await?;
        let post = BlogPost::new(Self::next_id(&posts), title, content);
        posts.push(post.clone());
        self.save(&posts).await?;
        tracing::debug!(post_id = post.id, path = %self.path.display(), "Inserted post");
        Ok(post)
    }

    async fn update(
        &self,
        id: i64,
        title: String,
        content: String,
    ) -> Result<Option<BlogPost>, RepoError> {
        let _guard = self.file_lock.lock().await;
        let mut posts = self.load().await?;
        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        post.title = title;
        post.content = content;
        post.timestamp = now_stamp();
        let updated = post.clone();
        self.save(&posts).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let _guard = self.file_lock.lock().await;
        let mut posts = self.load().await?;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() != before {
            self.save(&posts).await?;
        }
        Ok(())
    }
}
