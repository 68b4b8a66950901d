use sqlx::FromRow;

/// A topic row. Topics are seeded externally and read-only in this service.
#[derive(Debug, Clone, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
