//! Database record structures matching the table schemas.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
