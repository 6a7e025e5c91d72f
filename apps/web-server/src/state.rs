//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_core::{BlogService, ListOrder};
use quill_infra::json::JsonPostRepository;
use tera::Tera;

use crate::config::{AppConfig, StorageConfig};
use crate::templates;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub templates: Arc<Tera>,
    pub list_order: ListOrder,
}

impl AppState {
    /// Build the application state for the configured storage backing.
    ///
    /// A backing that cannot be opened is fatal: silently falling back to
    /// a different store would scatter the user's data across files.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let posts: Arc<dyn PostRepository> = match &config.storage {
            StorageConfig::Json { path } => {
                tracing::info!(path = %path, "Using JSON-file store");
                Arc::new(JsonPostRepository::new(path))
            }
            #[cfg(feature = "sqlite")]
            StorageConfig::Sqlite { url } => {
                use anyhow::Context;
                use migration::MigratorTrait;
                use quill_infra::database::{self, DatabaseConfig, SqlitePostRepository};

                let conn = database::connect(&DatabaseConfig::new(url))
                    .await
                    .context("failed to connect to the database")?;
                migration::Migrator::up(&conn, None)
                    .await
                    .context("failed to run database migrations")?;
                tracing::info!("Using SQLite store");
                Arc::new(SqlitePostRepository::new(conn))
            }
            #[cfg(not(feature = "sqlite"))]
            StorageConfig::Sqlite { .. } => {
                anyhow::bail!("DATABASE_URL is set but this build has no sqlite support")
            }
        };

        let templates = Arc::new(templates::build()?);

        tracing::info!("Application state initialized");

        Ok(Self {
            blog: BlogService::new(posts),
            templates,
            list_order: config.list_order,
        })
    }
}
