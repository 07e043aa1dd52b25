//! Request-scoped SQLite storage.
//!
//! [`SqliteStorage`] lives in application state and only knows how to reach the
//! database file. Each request gets its own [`RequestDb`] handle, which opens a
//! connection the first time it is needed and keeps it for the rest of the
//! request. The connection is released by [`RequestDb::close`] or, on any other
//! exit path, when the handle is dropped.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

use crate::infrastructure::ports::RepoError;

const AGENDA_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS agenda (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        address TEXT NOT NULL,
        email TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        phone_type TEXT NOT NULL
    )
"#;

/// Factory for request-scoped handles to the agenda database file.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteStorage {
    /// The file is created on first connect if it does not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// New handle for one request. Does not connect.
    pub fn session(&self) -> RequestDb {
        RequestDb {
            options: self.options.clone(),
            conn: None,
        }
    }

    /// Create the `agenda` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), RepoError> {
        let mut db = self.session();
        let conn = db.connection().await?;
        sqlx::query(AGENDA_SCHEMA)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
        db.close().await?;

        tracing::info!(path = %self.path.display(), "Agenda schema ready");
        Ok(())
    }
}

/// One request's handle to the database.
pub struct RequestDb {
    options: SqliteConnectOptions,
    conn: Option<SqliteConnection>,
}

impl RequestDb {
    /// The request's connection, opened on first call and reused afterwards.
    pub async fn connection(&mut self) -> Result<&mut SqliteConnection, RepoError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                tracing::debug!("Opening request storage connection");
                SqliteConnection::connect_with(&self.options)
                    .await
                    .map_err(|e| RepoError::database("connect", e))?
            }
        };
        Ok(self.conn.insert(conn))
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the connection, waiting for SQLite to close it.
    pub async fn close(mut self) -> Result<(), RepoError> {
        if let Some(conn) = self.conn.take() {
            conn.close()
                .await
                .map_err(|e| RepoError::database("close", e))?;
            tracing::debug!("Closed request storage connection");
        }
        Ok(())
    }
}

impl Drop for RequestDb {
    fn drop(&mut self) {
        // Dropping the connection shuts down its worker and closes the file.
        if self.conn.take().is_some() {
            tracing::debug!("Released request storage connection on drop");
        }
    }
}
