use std::collections::HashSet;

use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use crate::error::Result;

use super::SqliteStore;

impl SqliteStore {
    /// Flips the favorite marker for `entry_id` and returns the new state.
    pub fn toggle_favorite(&self, entry_id: &str) -> Result<bool> {
        self.with_tx(|tx| {
            let removed = tx.execute(
                "DELETE FROM favorites WHERE entry_id = ?1",
                params![entry_id],
            )?;
            if removed > 0 {
                return Ok(false);
            }
            tx.execute(
                "INSERT INTO favorites(entry_id, created_at) VALUES (?1, ?2)",
                params![entry_id, Utc::now().to_rfc3339()],
            )?;
            Ok(true)
        })
    }

    pub fn is_favorite(&self, entry_id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let found = conn
                .query_row(
                    "SELECT 1 FROM favorites WHERE entry_id = ?1",
                    params![entry_id],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            Ok(found)
        })
    }

    /// Favorite ids in the order they were marked.
    pub fn list_favorites(&self) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT entry_id FROM favorites ORDER BY created_at ASC, rowid ASC",
            )?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    pub fn favorite_set(&self) -> Result<HashSet<String>> {
        Ok(self.list_favorites()?.into_iter().collect())
    }

    pub fn count_favorites(&self) -> Result<usize> {
        self.count_rows("favorites")
    }
}
