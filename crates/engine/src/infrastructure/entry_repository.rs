//! SQLite entry repository.
//!
//! Runs on the request's [`RequestDb`]. Every write happens inside a
//! transaction that is committed before the call returns.

use agenda_domain::{ContactDetails, Entry, EntryId};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, Row};

use crate::infrastructure::ports::{EntryRepo, RepoError};
use crate::infrastructure::storage::RequestDb;

/// SQLite implementation of [`EntryRepo`] over one request's handle.
pub struct SqliteEntryRepo<'a> {
    db: &'a mut RequestDb,
}

impl<'a> SqliteEntryRepo<'a> {
    pub fn new(db: &'a mut RequestDb) -> Self {
        Self { db }
    }
}

fn row_to_entry(row: &SqliteRow) -> Result<Entry, RepoError> {
    let column = |e: sqlx::Error| RepoError::decode(e);

    let id: i64 = row.try_get("id").map_err(column)?;
    let phone_type: String = row.try_get("phone_type").map_err(column)?;
    let details = ContactDetails::from_stored(
        row.try_get("name").map_err(column)?,
        row.try_get("last_name").map_err(column)?,
        row.try_get("address").map_err(column)?,
        row.try_get("email").map_err(column)?,
        row.try_get("phone_number").map_err(column)?,
        &phone_type,
    )?;

    Ok(Entry::new(EntryId::from_i64(id), details))
}

#[async_trait]
impl<'a> EntryRepo for SqliteEntryRepo<'a> {
    async fn list(&mut self) -> Result<Vec<Entry>, RepoError> {
        let conn = self.db.connection().await?;
        let rows = sqlx::query(
            r#"
            SELECT id, name, last_name, address, email, phone_number, phone_type
            FROM agenda
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| RepoError::database("list_entries", e))?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn insert(&mut self, details: &ContactDetails) -> Result<EntryId, RepoError> {
        let conn = self.db.connection().await?;
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| RepoError::database("insert_entry", e))?;

        let result = sqlx::query(
            r#"
            INSERT INTO agenda (name, last_name, address, email, phone_number, phone_type)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(details.name())
        .bind(details.last_name())
        .bind(details.address())
        .bind(details.email())
        .bind(details.phone_number())
        .bind(details.phone_type().as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("insert_entry", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("insert_entry", e))?;

        Ok(EntryId::from_i64(result.last_insert_rowid()))
    }

    async fn update(&mut self, id: EntryId, details: &ContactDetails) -> Result<u64, RepoError> {
        let conn = self.db.connection().await?;
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| RepoError::database("update_entry", e))?;

        let result = sqlx::query(
            r#"
            UPDATE agenda
            SET name = ?, last_name = ?, address = ?, email = ?, phone_number = ?, phone_type = ?
            WHERE id = ?
            "#,
        )
        .bind(details.name())
        .bind(details.last_name())
        .bind(details.address())
        .bind(details.email())
        .bind(details.phone_number())
        .bind(details.phone_type().as_str())
        .bind(id.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("update_entry", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("update_entry", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&mut self, id: EntryId) -> Result<u64, RepoError> {
        let conn = self.db.connection().await?;
        let mut tx = conn
            .begin()
            .await
            .map_err(|e| RepoError::database("delete_entry", e))?;

        let result = sqlx::query("DELETE FROM agenda WHERE id = ?")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("delete_entry", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("delete_entry", e))?;

        Ok(result.rows_affected())
    }
}
