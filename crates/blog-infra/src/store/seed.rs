//! Fixed sample data a fresh store starts with.

use blog_core::domain::{Author, Post};

/// Sample authors, in insertion order.
pub fn authors() -> Vec<Author> {
    vec![
        Author::new(1, "John", 34),
        Author::new(2, "Alex", 12),
        Author::new(3, "Bob", 45),
    ]
}

/// Sample posts, each embedding a snapshot of one of [`authors`].
pub fn posts() -> Vec<Post> {
    let authors = authors();
    vec![
        Post::new(1, "News 1", "Text 1", authors[1].clone()),
        Post::new(2, "News 2", "Text 2", authors[0].clone()),
        Post::new(3, "News 3", "Text 3", authors[2].clone()),
    ]
}
