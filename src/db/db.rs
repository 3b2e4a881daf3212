use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the configured location.
    pub fn new() -> Result<Db> {
        let db_file_path = Config::read().database_path()?;
        Self::open(db_file_path)
    }

    /// Opens the database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn: Connection = Connection::open(path)?;

        Ok(Db { conn })
    }
}
