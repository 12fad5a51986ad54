//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{AuthorRepository, PostRepository};
use blog_infra::InMemoryBlogStore;

use crate::config::AppConfig;

/// Shared application state.
///
/// Both repositories point at the same store, so posts and authors are
/// guarded by one lock.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state from configuration.
    pub async fn new(config: &AppConfig) -> Self {
        let store = Self::build_store(config.seed_sample_data);

        tracing::info!(
            authors = store.author_count().await,
            posts = store.post_count().await,
            "Application state initialized"
        );

        Self::from_store(Arc::new(store))
    }

    pub fn from_store(store: Arc<InMemoryBlogStore>) -> Self {
        Self {
            authors: store.clone(),
            posts: store,
        }
    }

    #[cfg(feature = "seed")]
    fn build_store(seed: bool) -> InMemoryBlogStore {
        if seed {
            InMemoryBlogStore::seeded()
        } else {
            tracing::info!("Sample data disabled - starting with an empty store");
            InMemoryBlogStore::new()
        }
    }

    #[cfg(not(feature = "seed"))]
    fn build_store(seed: bool) -> InMemoryBlogStore {
        if seed {
            tracing::warn!("Built without seed feature - starting with an empty store");
        }
        InMemoryBlogStore::new()
    }
}
