use crate::{
    AppState,
    api::models::topics::{TopicResponse, TopicsEnvelope},
    db::handlers::Topics,
    errors::Error,
};
use axum::{extract::State, response::Json};

// GET /api/topics
pub async fn list_topics(State(state): State<AppState>) -> Result<Json<TopicsEnvelope>, Error> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Topics::new(&mut conn);

    let topics = repo.list().await?;
    Ok(Json(TopicsEnvelope {
        topics: topics.into_iter().map(TopicResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, seed_test_data};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn list_topics_returns_every_seeded_topic(pool: PgPool) {
        seed_test_data(&pool).await;
        let server = create_test_app(pool);

        let response = server.get("/api/topics").await;
        response.assert_status_ok();

        let body: TopicsEnvelope = response.json();
        assert_eq!(body.topics.len(), 3);
        assert!(
            body.topics
                .iter()
                .any(|t| t.slug == "mitch" && t.description == "The man, the Mitch, the legend")
        );
        assert!(body.topics.iter().all(|t| !t.slug.is_empty() && !t.description.is_empty()));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn list_topics_with_empty_table_returns_empty_array(pool: PgPool) {
        let server = create_test_app(pool);

        let response = server.get("/api/topics").await;
        response.assert_status_ok();
        let body: TopicsEnvelope = response.json();
        assert!(body.topics.is_empty());
    }
}
