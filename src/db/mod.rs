//! Database layer: repositories, record models, and error classification.
//!
//! Handlers acquire a connection from the pool in [`crate::AppState`] and
//! hand it to a repository; each statement is atomic and no multi-statement
//! transactions are used. The "check parent exists, then write child"
//! sequence is therefore not atomic against a concurrent delete of the
//! parent; that race is accepted and the write surfaces a constraint error
//! instead of corrupting data.

pub mod errors;
pub mod handlers;
pub mod models;
