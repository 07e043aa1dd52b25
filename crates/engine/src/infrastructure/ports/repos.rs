//! Repository port traits for database access.

use agenda_domain::{ContactDetails, Entry, EntryId};
use async_trait::async_trait;

use super::error::RepoError;

// =============================================================================
// Entry Storage
// =============================================================================

/// Storage for agenda entries.
///
/// Implementations are bound to one request's storage handle, hence `&mut self`.
/// `update` and `delete` report how many rows matched; zero is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepo: Send {
    async fn list(&mut self) -> Result<Vec<Entry>, RepoError>;
    async fn insert(&mut self, details: &ContactDetails) -> Result<EntryId, RepoError>;
    async fn update(&mut self, id: EntryId, details: &ContactDetails) -> Result<u64, RepoError>;
    async fn delete(&mut self, id: EntryId) -> Result<u64, RepoError>;
}
