use serde::{Deserialize, Serialize};

use super::Author;

/// Post entity - a piece of content attributed to an author.
///
/// `author` is a snapshot copied from the author collection when the post was
/// created or last re-attributed. It is never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: Author,
}

impl Post {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>, author: Author) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author,
        }
    }
}

/// Input for creating a post. The author is referenced by id and resolved by
/// the repository.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }
}

/// Partial update of a post.
///
/// `None` means "leave unchanged". A present value is always applied, even if
/// it equals the current one. Clearing a field is not expressible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<i64>,
}

impl PostPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.author_id.is_none()
    }

    /// Apply the patch to `post`.
    ///
    /// `author` is the author resolved from `author_id`; when present it
    /// replaces the post's snapshot.
    pub fn apply_to(self, post: &mut Post, author: Option<Author>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
        if let Some(author) = author {
            post.author = author;
        }
    }
}

/// Confirmation returned after a post has been removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDeleted {
    pub post_id: i64,
    pub detail: String,
}

impl PostDeleted {
    pub fn new(post_id: i64) -> Self {
        Self {
            post_id,
            detail: "deleted".to_string(),
        }
    }
}
