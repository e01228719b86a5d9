use rusqlite::Connection;

use crate::error::{Result, VaultError};

use super::SqliteStore;

const MIGRATION_SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS remote_entries (
        ordinal INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        category TEXT NOT NULL,
        entry_json TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_remote_entries_id
    ON remote_entries(id);

    CREATE TABLE IF NOT EXISTS user_entries (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        entry_json TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS favorites (
        entry_id TEXT PRIMARY KEY,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS notes (
        id TEXT PRIMARY KEY,
        entry_id TEXT,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_notes_entry_id
    ON notes(entry_id);

    CREATE TABLE IF NOT EXISTS system_kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
";

impl SqliteStore {
    pub(super) fn migrate(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute_batch(MIGRATION_SCHEMA_SQL)?;
            ensure_required_column(
                conn,
                "remote_entries",
                "entry_json",
                "unsupported remote_entries schema: entry_json is missing; reset the vault state database",
            )?;
            ensure_required_column(
                conn,
                "user_entries",
                "entry_json",
                "unsupported user_entries schema: entry_json is missing; reset the vault state database",
            )?;
            Ok(())
        })
    }
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for row in rows {
        if row? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ensure_required_column(
    conn: &Connection,
    table: &str,
    column: &str,
    error_message: &'static str,
) -> Result<()> {
    if has_column(conn, table, column)? {
        Ok(())
    } else {
        Err(VaultError::Validation(error_message.to_string()))
    }
}
