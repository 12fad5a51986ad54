//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /items/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

/// Body of `PUT /items/{post_id}/edit`.
///
/// Every field may be omitted or `null`; both mean "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditPostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
}

/// Body of `POST /user/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub age: i64,
}

/// Query string of `GET /search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub post_id: Option<i64>,
}

impl SearchQuery {
    /// The requested post id. Zero counts as not provided.
    pub fn requested_id(&self) -> Option<i64> {
        self.post_id.filter(|id| *id != 0)
    }
}
