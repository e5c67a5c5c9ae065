//! Infrastructure: SQLite store handle and migrations.

pub mod db;

pub use db::{init_db, Db};
