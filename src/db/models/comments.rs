use crate::types::{ArticleId, CommentId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A comment row.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Insert request for a new comment.
///
/// Both fields are optional on purpose: a missing required field is bound as
/// NULL so the store's NOT NULL constraint rejects it, which the error layer
/// classifies as a 400.
#[derive(Debug, Clone)]
pub struct CommentCreateDBRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}
