//! Entry CRUD operations.
//!
//! Each call is one unit of work on the request's repository. Writes are
//! all-or-nothing: input is validated in full before storage is touched.

use agenda_domain::{ContactDetails, ContactInput, DomainError, Entry, EntryId};

use crate::infrastructure::ports::{EntryRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Invalid input: {0}")]
    Invalid(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

pub struct EntryOps<'a> {
    repo: &'a mut dyn EntryRepo,
}

impl<'a> EntryOps<'a> {
    pub fn new(repo: &'a mut dyn EntryRepo) -> Self {
        Self { repo }
    }

    /// All entries in storage order.
    pub async fn list(&mut self) -> Result<Vec<Entry>, EntryError> {
        Ok(self.repo.list().await?)
    }

    pub async fn add(&mut self, input: ContactInput) -> Result<EntryId, EntryError> {
        let details = ContactDetails::validate(input)?;
        let id = self.repo.insert(&details).await?;
        tracing::info!(entry_id = %id, "Entry added");
        Ok(id)
    }

    /// Overwrite every field of entry `id`. An unknown id is not an error.
    pub async fn edit(&mut self, id: EntryId, input: ContactInput) -> Result<(), EntryError> {
        let details = ContactDetails::validate(input)?;
        let affected = self.repo.update(id, &details).await?;
        if affected == 0 {
            tracing::debug!(entry_id = %id, "Edit matched no entry");
        } else {
            tracing::info!(entry_id = %id, "Entry updated");
        }
        Ok(())
    }

    /// Remove entry `id` if present. An unknown id is not an error.
    pub async fn delete(&mut self, id: EntryId) -> Result<(), EntryError> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            tracing::debug!(entry_id = %id, "Delete matched no entry");
        } else {
            tracing::info!(entry_id = %id, "Entry deleted");
        }
        Ok(())
    }
}
