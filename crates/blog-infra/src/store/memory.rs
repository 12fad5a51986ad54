//! In-memory blog store - authors and posts behind a single lock.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::DomainError;
use blog_core::domain::{Author, NewAuthor, NewPost, Post, PostDeleted, PostPatch};
use blog_core::ports::{AuthorRepository, PostRepository};

struct Collections {
    authors: Vec<Author>,
    posts: Vec<Post>,
    next_author_id: i64,
    next_post_id: i64,
}

impl Collections {
    fn new(authors: Vec<Author>, posts: Vec<Post>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            authors,
            posts,
            next_author_id,
            next_post_id,
        }
    }

    fn author(&self, id: i64) -> Result<&Author, DomainError> {
        single_match(&self.authors, |a| a.id == id)
            .map(|idx| &self.authors[idx])
            .ok_or_else(|| {
                tracing::warn!(author_id = id, "Author not found");
                DomainError::author_not_found(id)
            })
    }

    fn post_index(&self, id: i64) -> Result<usize, DomainError> {
        single_match(&self.posts, |p| p.id == id).ok_or_else(|| {
            tracing::warn!(post_id = id, "Post not found");
            DomainError::post_not_found(id)
        })
    }
}

/// Position of the only item matching `pred`; `None` for zero or several.
fn single_match<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<usize> {
    let mut found = None;
    for (idx, item) in items.iter().enumerate() {
        if pred(item) {
            if found.is_some() {
                return None;
            }
            found = Some(idx);
        }
    }
    found
}

/// Take the next id from a counter, advancing it.
fn take_id(counter: &mut i64) -> Result<i64, DomainError> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or_else(|| DomainError::Internal("identifier space exhausted".to_string()))?;
    Ok(id)
}

/// In-memory repository for authors and posts.
///
/// Both collections share one async `RwLock`. Every mutation holds the write
/// guard for its whole resolve-validate-apply sequence, so id assignment and
/// author resolution cannot interleave with another writer.
///
/// Identifiers come from per-collection counters that start after the largest
/// id present at construction (or at 1) and are never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogStore {
    state: RwLock<Collections>,
}

impl InMemoryBlogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// Create a store holding the given authors and posts.
    pub fn with_data(authors: Vec<Author>, posts: Vec<Post>) -> Self {
        Self {
            state: RwLock::new(Collections::new(authors, posts)),
        }
    }

    /// Create a store holding the fixed sample data.
    #[cfg(feature = "seed")]
    pub fn seeded() -> Self {
        Self::with_data(super::seed::authors(), super::seed::posts())
    }

    pub async fn author_count(&self) -> usize {
        self.state.read().await.authors.len()
    }

    pub async fn post_count(&self) -> usize {
        self.state.read().await.posts.len()
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryBlogStore {
    async fn find_author_by_id(&self, id: i64) -> Result<Author, DomainError> {
        tracing::debug!(author_id = id, "Finding author by id");
        let state = self.state.read().await;
        let author = state.author(id)?.clone();
        Ok(author)
    }

    async fn list_authors(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.state.read().await.authors.clone())
    }

    async fn create_author(&self, input: NewAuthor) -> Result<Author, DomainError> {
        input.validate()?;

        let mut state = self.state.write().await;
        let id = take_id(&mut state.next_author_id)?;
        let author = Author::new(id, input.name, input.age);
        state.authors.push(author.clone());

        tracing::info!(author_id = id, "Author created");
        Ok(author)
    }
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn find_post_by_id(&self, id: i64) -> Result<Post, DomainError> {
        tracing::debug!(post_id = id, "Finding post by id");
        let state = self.state.read().await;
        let idx = state.post_index(id)?;
        Ok(state.posts[idx].clone())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.state.read().await.posts.clone())
    }

    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut state = self.state.write().await;

        let author = state.author(input.author_id)?.clone();
        let id = take_id(&mut state.next_post_id)?;

        let post = Post::new(id, input.title, input.body, author);
        state.posts.push(post.clone());

        tracing::info!(post_id = id, author_id = input.author_id, "Post created");
        Ok(post)
    }

    async fn edit_post(&self, id: i64, patch: PostPatch) -> Result<Post, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoChanges);
        }

        let mut state = self.state.write().await;
        let idx = state.post_index(id)?;

        // Resolve before touching the post so a bad reference changes nothing
        let author = match patch.author_id {
            Some(author_id) => Some(state.author(author_id)?.clone()),
            None => None,
        };

        let post = &mut state.posts[idx];
        patch.apply_to(post, author);

        tracing::info!(post_id = id, "Post edited");
        Ok(post.clone())
    }

    async fn delete_post(&self, id: i64) -> Result<PostDeleted, DomainError> {
        let mut state = self.state.write().await;
        let idx = state.post_index(id)?;
        state.posts.remove(idx);

        tracing::info!(post_id = id, "Post deleted");
        Ok(PostDeleted::new(id))
    }
}
