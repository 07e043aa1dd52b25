//! Application state and composition.

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::storage::SqliteStorage;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state. Holds no connection itself; each
/// request opens its own through [`SqliteStorage::session`].
pub struct App {
    pub config: AppConfig,
    pub storage: SqliteStorage,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let storage = SqliteStorage::new(&config.database_path);
        Self { config, storage }
    }
}
