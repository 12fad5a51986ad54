//! Ports - trait definitions the infrastructure layer implements.

mod repository;

pub use repository::{AuthorRepository, PostRepository};
