use sqlx::FromRow;

/// A user row. Users are seeded externally and read-only in this service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
