use async_trait::async_trait;

use crate::domain::{Author, NewAuthor, NewPost, Post, PostDeleted, PostPatch};
use crate::error::DomainError;

/// Author repository - authors are append-only.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find the single author with the given id.
    ///
    /// Fails with `NotFound` unless exactly one author matches.
    async fn find_author_by_id(&self, id: i64) -> Result<Author, DomainError>;

    /// All authors in insertion order.
    async fn list_authors(&self) -> Result<Vec<Author>, DomainError>;

    /// Validate and append a new author.
    async fn create_author(&self, input: NewAuthor) -> Result<Author, DomainError>;
}

/// Post repository with author-reference integrity.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find the single post with the given id.
    ///
    /// Fails with `NotFound` unless exactly one post matches.
    async fn find_post_by_id(&self, id: i64) -> Result<Post, DomainError>;

    /// All posts in insertion order, author snapshots as stored.
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;

    /// Resolve the referenced author and append a new post embedding a
    /// snapshot of it.
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;

    /// Apply a partial update in place and return the updated post.
    async fn edit_post(&self, id: i64, patch: PostPatch) -> Result<Post, DomainError>;

    /// Remove a post.
    async fn delete_post(&self, id: i64) -> Result<PostDeleted, DomainError>;
}
