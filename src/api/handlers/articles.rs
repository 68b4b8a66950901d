use crate::{
    AppState,
    api::handlers::parse_id,
    api::models::articles::{
        ArticleEnvelope, ArticleResponse, ArticlesEnvelope, ListArticlesQuery, VotePatch,
    },
    db::handlers::{ArticleFilter, Articles, SortBy, SortOrder, Topics},
    errors::Error,
};
use axum::{
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
    response::Json,
};

// GET /api/articles
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListArticlesQuery>,
) -> Result<Json<ArticlesEnvelope>, Error> {
    // Validate qualifiers against the allow-lists before any database work
    let sort_by = match query.sort_by.as_deref() {
        Some(raw) => raw.parse::<SortBy>().map_err(|_| Error::BadRequest {
            message: "Invalid sort by query".to_string(),
        })?,
        None => SortBy::default(),
    };
    let order = match query.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>().map_err(|_| Error::BadRequest {
            message: "Invalid order query".to_string(),
        })?,
        None => SortOrder::default(),
    };
    let filter = ArticleFilter {
        topic: query.topic,
        sort_by,
        order,
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let articles;
    {
        let mut repo = Articles::new(&mut conn);
        articles = repo.list(&filter).await?;
    }

    // An empty result under a topic filter is only a 404 when the topic
    // itself is unknown; a recognized topic with no articles is a 200.
    if articles.is_empty() {
        if let Some(topic) = filter.topic.as_deref() {
            let mut topics = Topics::new(&mut conn);
            if !topics.exists(topic).await? {
                return Err(Error::NotFound {
                    message: "Topic not found".to_string(),
                });
            }
        }
    }

    Ok(Json(ArticlesEnvelope {
        articles: articles.into_iter().map(ArticleResponse::from).collect(),
    }))
}

// GET /api/articles/{article_id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleEnvelope>, Error> {
    let article_id = parse_id(&article_id)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Articles::new(&mut conn);

    let article = repo.get_by_id(article_id).await?.ok_or_else(|| Error::NotFound {
        message: "article not found".to_string(),
    })?;

    Ok(Json(ArticleEnvelope {
        article: article.into(),
    }))
}

// PATCH /api/articles/{article_id}
pub async fn patch_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<VotePatch>, JsonRejection>,
) -> Result<Json<ArticleEnvelope>, Error> {
    let article_id = parse_id(&article_id)?;
    // A body that fails to deserialize (e.g. a non-integer inc_votes) is the
    // same class of failure as a malformed identifier.
    let Json(patch) = body.map_err(|_| Error::InvalidInput)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Articles::new(&mut conn);

    let article = repo
        .set_votes(article_id, patch.inc_votes)
        .await?
        .ok_or_else(|| Error::NotFound {
            message: "article not found".to_string(),
        })?;

    Ok(Json(ArticleEnvelope {
        article: article.into(),
    }))
}
