//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `seed` (default) - Fixed sample authors and posts for a fresh store

pub mod store;

pub use store::InMemoryBlogStore;

#[cfg(feature = "seed")]
pub use store::seed;
