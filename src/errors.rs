//! Service-level error type and its mapping onto HTTP responses.
//!
//! Failures are classified by an ordered chain of rules: domain errors raised
//! deliberately by handlers or repositories carry their own status and
//! message and win over store-level signals; store-level signals are
//! recognized by stable error codes in [`DbError`]; anything left is a
//! generic server fault whose detail is logged but never sent to the client.
//!
//! Every error response body has the shape `{"msg": "..."}`.

use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// A path or body value could not be coerced to the expected integer type
    #[error("invalid input")]
    InvalidInput,

    /// Invalid request data (e.g. a listing qualifier outside the allow-list)
    #[error("{message}")]
    BadRequest { message: String },

    /// Requested resource not found; the message is entity-specific
    #[error("{message}")]
    NotFound { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// JSON body used for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput => StatusCode::BAD_REQUEST,
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::InvalidTextRepresentation { .. } => StatusCode::BAD_REQUEST,
                DbError::NotNullViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::ForeignKeyViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the user-facing message, without leaking internal detail
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidInput => "invalid input".to_string(),
            Error::BadRequest { message } => message.clone(),
            Error::NotFound { message } => message.clone(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "not found".to_string(),
                DbError::InvalidTextRepresentation { .. } => "invalid input".to_string(),
                // Required-field misses and dangling references both read as a
                // malformed write from the client's point of view.
                DbError::NotNullViolation { .. } => "bad request".to_string(),
                DbError::ForeignKeyViolation { .. } => "bad request".to_string(),
                DbError::Other(_) => "internal server error".to_string(),
            },
            Error::Other(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full detail for debugging, tiered by severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::InvalidInput | Error::BadRequest { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let body = ErrorBody {
            msg: self.user_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_carry_their_own_status_and_message() {
        let err = Error::NotFound {
            message: "article not found".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "article not found");

        let err = Error::BadRequest {
            message: "Invalid sort by query".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Invalid sort by query");
    }

    #[test]
    fn malformed_identifiers_map_to_invalid_input() {
        let err = Error::InvalidInput;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "invalid input");

        let err = Error::Database(DbError::InvalidTextRepresentation {
            message: "invalid input syntax for type integer".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "invalid input");
    }

    #[test]
    fn constraint_violations_map_to_bad_request() {
        let err = Error::Database(DbError::NotNullViolation {
            table: Some("comments".to_string()),
            message: "null value in column \"body\"".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "bad request");
    }

    #[test]
    fn unclassified_faults_stay_generic() {
        let err = Error::Other(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "internal server error");
    }
}
