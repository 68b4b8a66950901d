//! Axum route handlers, one module per resource.
//!
//! Each handler extracts and coerces request parameters, sequences the
//! repository calls it needs (confirming a parent article exists before
//! touching its comments), shapes an entity-keyed JSON response, and forwards
//! any failure to [`crate::errors::Error`] unchanged.

pub mod articles;
pub mod comments;
pub mod meta;
pub mod topics;
pub mod users;

use crate::errors::Error;

/// Coerce a path segment into an integer key. Anything non-numeric is a 400
/// "invalid input", never a 404.
pub(crate) fn parse_id(raw: &str) -> Result<i32, Error> {
    raw.parse().map_err(|_| Error::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::parse_id;
    use crate::errors::Error;

    #[test]
    fn parse_id_rejects_non_integer_identifiers() {
        assert_eq!(parse_id("4").unwrap(), 4);
        assert!(matches!(parse_id("not-an-id"), Err(Error::InvalidInput)));
        assert!(matches!(parse_id("4.5"), Err(Error::InvalidInput)));
        assert!(matches!(parse_id(""), Err(Error::InvalidInput)));
    }
}
