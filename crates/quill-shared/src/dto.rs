//! Request payloads.

use serde::{Deserialize, Serialize};

/// Form body for the create and edit pages.
///
/// Both fields are required; a submission missing either one never
/// deserializes, so handlers see only well-formed payloads. Empty strings
/// are accepted - the server applies no content validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}
