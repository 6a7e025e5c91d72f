use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp layout used everywhere a post is stamped.
///
/// Zero-padded and fixed-width, so lexicographic order on the rendered
/// string equals chronological order. `BlogService` sorts by the raw
/// string and depends on this property.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time rendered in [`TIMESTAMP_FORMAT`].
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// BlogPost entity - the single record type the application stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Store-assigned, unique, never reused after deletion.
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Set on create and overwritten on every update.
    pub timestamp: String,
}

impl BlogPost {
    /// Create a post stamped with the current time.
    pub fn new(id: i64, title: String, content: String) -> Self {
        Self {
            id,
            title,
            content,
            timestamp: now_stamp(),
        }
    }
}
