//! File-based schema migrations applied at startup.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::AppResult;

/// Apply every pending `.sql` file from `dir`, in filename order. Applied
/// files are recorded by name in `_migrations`; each script runs inside
/// its own transaction, so a failing script leaves the schema untouched
/// and is retried on the next startup.
pub fn run_migrations(conn: &mut Connection, dir: &Path) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "sql"))
        .collect();
    scripts.sort();
    debug!(dir = %dir.display(), count = scripts.len(), "Found migration files");

    let mut applied = 0;
    for path in scripts {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let already_applied: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE name = ?)",
            [name.as_str()],
            |row| row.get(0),
        )?;
        if already_applied {
            continue;
        }

        let sql = fs::read_to_string(&path)?;
        info!(migration = %name, "Applying migration");

        let tx = conn.transaction()?;
        tx.execute_batch(&sql)?;
        tx.execute("INSERT INTO _migrations (name) VALUES (?)", [name.as_str()])?;
        tx.commit()?;
        applied += 1;
    }

    if applied > 0 {
        info!(count = applied, "Schema migrations applied");
    } else {
        debug!("Schema is up to date");
    }
    Ok(())
}
