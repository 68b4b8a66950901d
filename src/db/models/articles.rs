use crate::types::ArticleId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A bare article row, as returned by `UPDATE ... RETURNING *`.
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// A full article row plus its aggregated comment count, for single-article
/// reads. `comment_count` is computed by the query, never stored.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleWithCommentCount {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

/// The listing projection: no body, but with the aggregated comment count.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleSummary {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}
