//! Database repository for comments.

use crate::db::{
    errors::Result,
    models::comments::{Comment, CommentCreateDBRequest},
};
use crate::types::{ArticleId, CommentId};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Comments<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Comments<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Comments for an article, newest first. The caller is responsible for
    /// confirming the article exists before asking for its comments.
    #[instrument(skip(self), err)]
    pub async fn list_for_article(&mut self, article_id: ArticleId) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT comment_id, article_id, author, body, votes, created_at \
             FROM comments WHERE article_id = $1 ORDER BY created_at DESC",
        )
        .bind(article_id)
        .fetch_all(&mut *self.db)
        .await?;
        Ok(comments)
    }

    /// Insert a comment. Missing required fields are bound as NULL and
    /// rejected by the store's NOT NULL constraints.
    #[instrument(skip(self, request), fields(author = ?request.username), err)]
    pub async fn insert(
        &mut self,
        article_id: ArticleId,
        request: &CommentCreateDBRequest,
    ) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(article_id)
        .bind(request.username.as_deref())
        .bind(request.body.as_deref())
        .fetch_one(&mut *self.db)
        .await?;
        Ok(comment)
    }

    /// Delete a comment by id; reports existence via the affected-row count.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: CommentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::seed_test_data;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn insert_assigns_id_and_timestamp(pool: PgPool) {
        seed_test_data(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Comments::new(&mut conn);

        let request = CommentCreateDBRequest {
            username: Some("lurker".to_string()),
            body: Some("First!".to_string()),
        };
        let comment = repo.insert(4, &request).await.unwrap();
        assert!(comment.comment_id > 0);
        assert_eq!(comment.article_id, 4);
        assert_eq!(comment.author, "lurker");
        assert_eq!(comment.votes, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn insert_without_required_fields_hits_the_not_null_constraint(pool: PgPool) {
        seed_test_data(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Comments::new(&mut conn);

        let request = CommentCreateDBRequest {
            username: Some("lurker".to_string()),
            body: None,
        };
        let err = repo.insert(4, &request).await.unwrap_err();
        assert!(matches!(err, DbError::NotNullViolation { .. }));

        let request = CommentCreateDBRequest {
            username: None,
            body: Some("who am I".to_string()),
        };
        let err = repo.insert(4, &request).await.unwrap_err();
        assert!(matches!(err, DbError::NotNullViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn delete_reports_existence_via_rows_affected(pool: PgPool) {
        seed_test_data(&pool).await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Comments::new(&mut conn);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }
}
