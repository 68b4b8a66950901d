//! Database repository for articles, including the listing query builder.
//!
//! The listing query is assembled dynamically, but only validated enum
//! variants ever reach the query text: the sort column and direction come
//! from fixed mappings, and the topic filter is always bound as a parameter.

use crate::db::{
    errors::Result,
    models::articles::{Article, ArticleSummary, ArticleWithCommentCount},
};
use crate::types::ArticleId;
use sqlx::PgConnection;
use std::str::FromStr;
use tracing::instrument;

/// Allow-listed sort columns for the articles listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    CreatedAt,
    Votes,
    Title,
    CommentCount,
    Author,
}

impl SortBy {
    /// The column (or aggregate alias) inserted into the query text.
    fn column(self) -> &'static str {
        match self {
            SortBy::CreatedAt => "articles.created_at",
            SortBy::Votes => "articles.votes",
            SortBy::Title => "articles.title",
            SortBy::CommentCount => "comment_count",
            SortBy::Author => "articles.author",
        }
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortBy::CreatedAt),
            "votes" => Ok(SortBy::Votes),
            "title" => Ok(SortBy::Title),
            "comment_count" => Ok(SortBy::CommentCount),
            "author" => Ok(SortBy::Author),
            _ => Err(()),
        }
    }
}

/// Sort direction, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Validated qualifiers for the articles listing.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

pub struct Articles<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Articles<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: ArticleId) -> Result<Option<ArticleWithCommentCount>> {
        let article = sqlx::query_as::<_, ArticleWithCommentCount>(
            "SELECT articles.*, COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON articles.article_id = comments.article_id \
             WHERE articles.article_id = $1 \
             GROUP BY articles.article_id",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;
        Ok(article)
    }

    #[instrument(
        skip(self, filter),
        fields(topic = ?filter.topic, sort_by = ?filter.sort_by, order = ?filter.order),
        err
    )]
    pub async fn list(&mut self, filter: &ArticleFilter) -> Result<Vec<ArticleSummary>> {
        let mut sql = String::from(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
             articles.created_at, articles.votes, COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON articles.article_id = comments.article_id",
        );
        if filter.topic.is_some() {
            sql.push_str(" WHERE articles.topic = $1");
        }
        sql.push_str(" GROUP BY articles.article_id");
        sql.push_str(&format!(" ORDER BY {} {}", filter.sort_by.column(), filter.order.as_sql()));

        let mut query = sqlx::query_as::<_, ArticleSummary>(&sql);
        if let Some(topic) = &filter.topic {
            query = query.bind(topic);
        }

        let articles = query.fetch_all(&mut *self.db).await?;
        Ok(articles)
    }

    /// Set the vote count and return the updated row, or `None` when the
    /// article does not exist. `None` for `votes` leaves the stored value
    /// untouched while still confirming the row exists.
    #[instrument(skip(self), err)]
    pub async fn set_votes(
        &mut self,
        id: ArticleId,
        votes: Option<i32>,
    ) -> Result<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(
            "UPDATE articles SET votes = COALESCE($1, votes) WHERE article_id = $2 RETURNING *",
        )
        .bind(votes)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;
        Ok(article)
    }
}
