//! Infrastructure: SQLite database file and schema.

pub mod db;

pub use db::{init_db, Database};
