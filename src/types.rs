//! Shared identifier types.

/// Surrogate integer key for articles.
pub type ArticleId = i32;

/// Surrogate integer key for comments.
pub type CommentId = i32;
