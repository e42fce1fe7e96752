//! SQLite connection pooling.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

const POOL_SIZE: u32 = 10;

/// Run on every pooled connection before first use. WAL keeps readers
/// from blocking the analysis pipeline's writes.
const CONNECTION_PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA foreign_keys = ON;
    PRAGMA busy_timeout = 5000;
";

pub fn create_pool(database_path: &Path) -> Result<DbPool, r2d2::Error> {
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let manager = SqliteConnectionManager::file(database_path)
        .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));
    Pool::builder().max_size(POOL_SIZE).build(manager)
}

/// Shared in-memory database for tests. A single connection keeps the
/// schema alive for the pool's lifetime; WAL makes no sense in memory.
pub fn create_in_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    Pool::builder().max_size(1).build(manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_pool_creates_parent_dirs_and_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data.db");

        let pool = create_pool(&path).unwrap();
        let conn = pool.get().unwrap();

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |r| r.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_in_memory_pool_shares_schema() {
        let pool = create_in_memory_pool().unwrap();
        {
            let conn = pool.get().unwrap();
            conn.execute("CREATE TABLE t (id INTEGER)", []).unwrap();
        }
        let conn = pool.get().unwrap();
        conn.execute("INSERT INTO t (id) VALUES (1)", []).unwrap();
    }
}
