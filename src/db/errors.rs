//! Unified error type for database operations.

use thiserror::Error;

/// Postgres reports a value that cannot be parsed as the column's type
/// (e.g. text where an integer key is expected) with this SQLSTATE.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Errors surfaced by the repository layer that application code can handle.
///
/// Constraint failures are recognized by their stable error kind or SQLSTATE
/// code, never by matching engine-specific message text.
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// A supplied value could not be parsed as the expected column type
    #[error("Invalid text representation: {message}")]
    InvalidTextRepresentation { message: String },

    /// Not-null constraint violation (required field missing on insert)
    #[error("Not-null constraint violation")]
    NotNullViolation { table: Option<String>, message: String },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using sqlx's error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                if db_err.code().as_deref() == Some(INVALID_TEXT_REPRESENTATION) {
                    DbError::InvalidTextRepresentation {
                        message: db_err.message().to_string(),
                    }
                } else if matches!(db_err.kind(), sqlx::error::ErrorKind::NotNullViolation) {
                    DbError::NotNullViolation {
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else if db_err.is_foreign_key_violation() {
                    DbError::ForeignKeyViolation {
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else {
                    // All other database errors are non-recoverable
                    DbError::Other(anyhow::Error::from(err))
                }
            }
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
