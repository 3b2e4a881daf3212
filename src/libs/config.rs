//! Application configuration resolved from the environment.
//!
//! Three optional settings control the database connection, each with a
//! default suitable for local development:
//!
//! - `TASKMATE_DB` — path to the SQLite database file. Defaults to
//!   `taskmate.db` in the platform data directory.
//! - `TASKMATE_DB_USER` / `TASKMATE_DB_PASSWORD` — accepted for parity with
//!   server-backed deployments; the bundled SQLite backend ignores them.
//!
//! Values may also come from a `.env` file in the working directory, loaded
//! via `dotenv` on first access.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env::var;
use std::path::PathBuf;
use std::sync::Once;

pub const DB_FILE_NAME: &str = "taskmate.db";

static LOAD_DOTENV: Once = Once::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file path; `None` means the platform default location.
    pub database: Option<PathBuf>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` once.
    pub fn read() -> Self {
        LOAD_DOTENV.call_once(|| {
            let _ = dotenv::dotenv();
        });
        Config {
            database: var("TASKMATE_DB").ok().map(PathBuf::from),
            username: var("TASKMATE_DB_USER").ok(),
            password: var("TASKMATE_DB_PASSWORD").ok(),
        }
    }

    /// Resolves the database path, falling back to the platform data dir.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
