//! Application configuration

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Names a dotenv-style file whose keys override the process environment.
pub const SETTINGS_FILE_VAR: &str = "AGENDA_SETTINGS";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file holding the agenda table
    pub database_path: PathBuf,
    /// Interface to bind
    pub server_host: String,
    /// HTTP port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables, applying the optional
    /// settings file named by `AGENDA_SETTINGS` on top.
    pub fn from_env() -> Result<Self> {
        let overrides = match env::var(SETTINGS_FILE_VAR) {
            Ok(path) => load_settings_file(Path::new(&path)),
            Err(_) => HashMap::new(),
        };

        Self::from_source(merged_lookup(&overrides, |key| env::var(key).ok()))
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            database_path: lookup("AGENDA_DATABASE")
                .unwrap_or_else(|| "agenda.db".to_string())
                .into(),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Key lookup where settings-file values take precedence over `fallback`.
fn merged_lookup<'a>(
    overrides: &'a HashMap<String, String>,
    fallback: impl Fn(&str) -> Option<String> + 'a,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| overrides.get(key).cloned().or_else(|| fallback(key))
}

/// Read `KEY=VALUE` pairs from a settings file.
///
/// A missing or malformed file is logged and treated as empty.
fn load_settings_file(path: &Path) -> HashMap<String, String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Settings file not loaded");
            return HashMap::new();
        }
    };

    let mut settings = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                settings.insert(key, value);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping malformed settings line");
            }
        }
    }

    tracing::info!(path = %path.display(), keys = settings.len(), "Loaded settings file");
    settings
}
