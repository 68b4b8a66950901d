//! Database repository for topics.

use crate::db::{errors::Result, models::topics::Topic};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Topics<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Topics<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
            .fetch_all(&mut *self.db)
            .await?;
        Ok(topics)
    }

    /// Whether a topic with the given slug exists. Used by the articles
    /// listing to distinguish "known topic, no articles" from "no such topic".
    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, slug: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&mut *self.db)
                .await?;
        Ok(exists)
    }
}
