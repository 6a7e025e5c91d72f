//! Application configuration loaded from environment variables.

use std::env;

use quill_core::ListOrder;

/// Storage backing selected for this deployment.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Flat JSON document, rewritten in full on every mutation.
    Json { path: String },
    /// Single-table SQLite database.
    Sqlite { url: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub list_order: ListOrder,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` (e.g. `sqlite://blog.db?mode=rwc`) selects the SQLite
    /// backing; otherwise the JSON file at `BLOG_STORE_PATH` is used.
    pub fn from_env() -> Self {
        let storage = match env::var("DATABASE_URL") {
            Ok(url) => StorageConfig::Sqlite { url },
            Err(_) => StorageConfig::Json {
                path: env::var("BLOG_STORE_PATH").unwrap_or_else(|_| "blogs.json".to_string()),
            },
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage,
            list_order: env::var("LIST_ORDER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}
