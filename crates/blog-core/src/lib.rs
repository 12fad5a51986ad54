//! # Blog Core
//!
//! The domain layer of the blog API.
//! Posts, authors, their validation rules and the repository ports.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, EntityKind};
