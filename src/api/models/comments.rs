use crate::db::models::comments::{Comment, CommentCreateDBRequest};
use crate::types::{ArticleId, CommentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for POST /api/articles/:article_id/comments.
///
/// Fields are optional so a missing one reaches the store's NOT NULL
/// constraint and is classified as a 400 there, rather than being rejected
/// with a deserialization error of a different shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreate {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentEnvelope {
    pub comment: CommentResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsEnvelope {
    pub comments: Vec<CommentResponse>,
}

impl From<CommentCreate> for CommentCreateDBRequest {
    fn from(request: CommentCreate) -> Self {
        Self {
            username: request.username,
            body: request.body,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(record: Comment) -> Self {
        Self {
            comment_id: record.comment_id,
            article_id: record.article_id,
            author: record.author,
            body: record.body,
            votes: record.votes,
            created_at: record.created_at,
        }
    }
}
