//! Database repository for users.

use crate::db::{errors::Result, models::users::User};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Users<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(&mut *self.db)
            .await?;
        Ok(users)
    }
}
