use crate::{
    AppState,
    api::handlers::parse_id,
    api::models::comments::{CommentCreate, CommentEnvelope, CommentResponse, CommentsEnvelope},
    db::handlers::{Articles, Comments},
    errors::Error,
};
use axum::{
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::Json,
};
use sqlx::PgConnection;

/// Confirm the parent article exists before any child operation runs. This
/// gives a precise 404 instead of an ambiguous empty result or a foreign-key
/// failure, at the cost of an accepted check-then-act race.
async fn require_article(conn: &mut PgConnection, article_id: i32) -> Result<(), Error> {
    let mut repo = Articles::new(conn);
    repo.get_by_id(article_id).await?.ok_or_else(|| Error::NotFound {
        message: "article not found".to_string(),
    })?;
    Ok(())
}

// GET /api/articles/{article_id}/comments
pub async fn list_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<CommentsEnvelope>, Error> {
    let article_id = parse_id(&article_id)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    require_article(&mut conn, article_id).await?;

    let mut repo = Comments::new(&mut conn);
    let comments = repo.list_for_article(article_id).await?;

    Ok(Json(CommentsEnvelope {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

// POST /api/articles/{article_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<CommentCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentEnvelope>), Error> {
    let article_id = parse_id(&article_id)?;
    // A body that fails to deserialize (e.g. a non-string username) is the
    // same class of failure as a malformed identifier.
    let Json(request) = body.map_err(|_| Error::InvalidInput)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    require_article(&mut conn, article_id).await?;

    let mut repo = Comments::new(&mut conn);
    let comment = repo.insert(article_id, &request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentEnvelope {
            comment: comment.into(),
        }),
    ))
}

// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, Error> {
    let comment_id = parse_id(&comment_id)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Comments::new(&mut conn);

    match repo.delete(comment_id).await? {
        true => Ok(StatusCode::NO_CONTENT),
        false => Err(Error::NotFound {
            message: "not found".to_string(),
        }),
    }
}
