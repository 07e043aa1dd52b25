//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (could swap SQLite -> Postgres)

mod error;
mod repos;

pub use error::RepoError;
pub use repos::*;
