use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// An open, migrated SQLite database.
pub struct Db {
    pub conn: Connection,
    pub path: PathBuf,
}

impl Db {
    /// Opens the database named by the configuration.
    pub fn new() -> Result<Db> {
        let path = Config::read()?.database_path()?;
        Self::open(path)
    }

    /// Opens (or creates) the database at `path` and brings its schema up to
    /// date.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref().to_path_buf();
        let mut conn = Connection::open(&path)?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn, path })
    }

    /// Opens the database without touching its schema.
    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}
