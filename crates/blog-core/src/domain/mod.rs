//! Domain entities - the core business objects.

mod author;
mod post;

pub use author::{AGE_RANGE, Author, FieldViolation, NAME_LENGTH, NewAuthor};
pub use post::{NewPost, Post, PostDeleted, PostPatch};
