//! Request/response data structures for the API.
//!
//! Success bodies always use entity-named keys (`article`, `articles`,
//! `topics`, ...) rather than a bare array or object at the top level, so
//! each resource has an envelope type alongside its DTOs.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
