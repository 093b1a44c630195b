//! SQLite database file and schema.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tours (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price REAL NOT NULL,
    destination TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
)";

/// Handle to the backing database file.
///
/// Holds no connection: every operation opens its own and drops it before
/// returning.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open a fresh connection to the database file.
    pub fn connect(&self) -> Result<Connection, AppError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

/// Initialize DB at path, create the tours table if absent, return the handle.
pub fn init_db(db_path: &Path) -> Result<Database, AppError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
    }
    let db = Database {
        path: db_path.to_path_buf(),
    };
    let conn = db.connect()?;
    create_schema(&conn)?;
    Ok(db)
}

fn create_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute(SCHEMA, [])?;
    Ok(())
}
