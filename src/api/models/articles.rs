use crate::db::models::articles::{Article, ArticleSummary, ArticleWithCommentCount};
use crate::types::ArticleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the articles listing. All qualifiers are optional
/// and independent; validation happens in the handler before any query runs.
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesQuery {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Body for PATCH /api/articles/:article_id. An omitted `inc_votes` leaves
/// the stored value alone: the caller gets the unchanged article back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotePatch {
    pub inc_votes: Option<i32>,
}

/// Article DTO covering all three read shapes: the listing omits `body`, a
/// single-article read includes both `body` and `comment_count`, and the
/// vote-patch response echoes the updated row without a `comment_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article_id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlesEnvelope {
    pub articles: Vec<ArticleResponse>,
}

impl From<ArticleWithCommentCount> for ArticleResponse {
    fn from(record: ArticleWithCommentCount) -> Self {
        Self {
            article_id: record.article_id,
            title: record.title,
            topic: record.topic,
            author: record.author,
            body: Some(record.body),
            created_at: record.created_at,
            votes: record.votes,
            comment_count: Some(record.comment_count),
        }
    }
}

impl From<ArticleSummary> for ArticleResponse {
    fn from(record: ArticleSummary) -> Self {
        Self {
            article_id: record.article_id,
            title: record.title,
            topic: record.topic,
            author: record.author,
            body: None,
            created_at: record.created_at,
            votes: record.votes,
            comment_count: Some(record.comment_count),
        }
    }
}

impl From<Article> for ArticleResponse {
    fn from(record: Article) -> Self {
        Self {
            article_id: record.article_id,
            title: record.title,
            topic: record.topic,
            author: record.author,
            body: Some(record.body),
            created_at: record.created_at,
            votes: record.votes,
            comment_count: None,
        }
    }
}
