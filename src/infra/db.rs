//! SQLite connection and migrations.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to the store file. Every operation opens its own connection.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection; it is closed when the caller drops it.
    pub fn connect(&self) -> Result<Connection, AppError> {
        Connection::open(&self.path).map_err(|e| AppError::Db(e.to_string()))
    }
}

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

/// Initialize DB at path, run migrations, return the store handle.
pub fn init_db(db_path: &Path) -> Result<Db, AppError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
    }
    let db = Db {
        path: db_path.to_path_buf(),
    };
    let mut conn = db.connect()?;
    run_migrations(&mut conn)?;
    Ok(db)
}

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;

    // Ensure schema_migrations exists (first run)
    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations \
         (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        // The script records its own version; we do that below instead
        let statements = sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.contains("INSERT INTO schema_migrations"));
        for stmt in statements {
            tx.execute(stmt, [])?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
        log::info!("Applied migration {}", version);
    }

    tx.commit()?;
    Ok(())
}
