//! SQLite repository implementation.
//!
//! Per-row statements; durability comes from the engine. Update is a
//! read-then-write pair, not a transaction, so two concurrent editors of
//! the same post can interleave.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel};

use quill_core::domain::{now_stamp, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{ActiveModel, Entity as PostEntity};

/// SQLite post repository.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.map(Into::into))
    }

    async fn insert(&self, title: String, content: String) -> Result<BlogPost, RepoError> {
        let model = ActiveModel {
            id: NotSet, // AUTOINCREMENT assigns it
            title: Set(title),
            content: Set(content),
            timestamp: Set(now_stamp()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(
        &self,
        id: i64,
        title: String,
        content: String,
    ) -> Result<Option<BlogPost>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.title = Set(title);
        active.content = Set(content);
        active.timestamp = Set(now_stamp());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        // rows_affected == 0 means the id was already gone; that is a no-op,
        // not an error.
        PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
