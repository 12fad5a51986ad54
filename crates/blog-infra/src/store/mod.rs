//! Blog storage - in-memory, process-local.

mod memory;

#[cfg(feature = "seed")]
pub mod seed;

pub use memory::InMemoryBlogStore;
