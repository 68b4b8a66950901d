use crate::{
    AppState,
    api::models::users::{UserResponse, UsersEnvelope},
    db::handlers::Users,
    errors::Error,
};
use axum::{extract::State, response::Json};

// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersEnvelope>, Error> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Users::new(&mut conn);

    let users = repo.list().await?;
    Ok(Json(UsersEnvelope {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, seed_test_data};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn list_users_returns_every_seeded_user(pool: PgPool) {
        seed_test_data(&pool).await;
        let server = create_test_app(pool);

        let response = server.get("/api/users").await;
        response.assert_status_ok();

        let body: UsersEnvelope = response.json();
        assert_eq!(body.users.len(), 4);
        assert!(body.users.iter().any(|u| u.username == "butter_bridge"));
        assert!(body.users.iter().all(|u| !u.name.is_empty() && !u.avatar_url.is_empty()));
    }
}
