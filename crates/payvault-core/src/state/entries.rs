use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use crate::error::{Result, VaultError};
use crate::models::Entry;

use super::{SqliteStore, decode_entries, encode_entry, usize_to_i64_saturating};

impl SqliteStore {
    /// Swaps the whole remote cache in one transaction. Readers see either
    /// the previous cache or the new one, never a mix.
    pub fn replace_remote_entries(&self, entries: &[Entry]) -> Result<usize> {
        let mut encoded = Vec::with_capacity(entries.len());
        for entry in entries {
            encoded.push((entry, encode_entry(entry)?));
        }

        let written = self.with_tx(|tx| {
            tx.execute("DELETE FROM remote_entries", [])?;
            let mut stmt = tx.prepare(
                r"
                INSERT INTO remote_entries(ordinal, id, category, entry_json)
                VALUES (?1, ?2, ?3, ?4)
                ",
            )?;
            for (ordinal, (entry, entry_json)) in encoded.iter().enumerate() {
                stmt.execute(params![
                    usize_to_i64_saturating(ordinal),
                    entry.id,
                    entry.category,
                    entry_json
                ])?;
            }
            Ok(encoded.len())
        })?;
        tracing::debug!(count = written, "replaced remote cache");
        Ok(written)
    }

    pub fn list_remote_entries(&self) -> Result<Vec<Entry>> {
        let rows = self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT entry_json FROM remote_entries ORDER BY ordinal ASC")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })?;
        decode_entries(rows)
    }

    pub fn count_remote_entries(&self) -> Result<usize> {
        self.count_rows("remote_entries")
    }

    pub fn insert_user_entry(&self, entry: &Entry) -> Result<()> {
        let entry_json = encode_entry(entry)?;
        let now = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO user_entries(id, entry_json, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?3)
                ",
                params![entry.id, entry_json, now],
            )?;
            Ok(())
        })?;
        tracing::debug!(entry_id = %entry.id, "inserted user entry");
        Ok(())
    }

    /// Inserts a batch of user entries atomically; any failure leaves the
    /// table untouched.
    pub fn insert_user_entries(&self, entries: &[Entry]) -> Result<usize> {
        let mut encoded = Vec::with_capacity(entries.len());
        for entry in entries {
            encoded.push((entry.id.as_str(), encode_entry(entry)?));
        }
        let now = Utc::now().to_rfc3339();
        self.with_tx(|tx| {
            let mut stmt = tx.prepare(
                r"
                INSERT INTO user_entries(id, entry_json, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?3)
                ",
            )?;
            for (id, entry_json) in &encoded {
                stmt.execute(params![id, entry_json, now])?;
            }
            Ok(encoded.len())
        })
    }

    pub fn get_user_entry(&self, id: &str) -> Result<Option<Entry>> {
        let raw = self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT entry_json FROM user_entries WHERE id = ?1",
                    params![id],
                    |row| row.get::<_, String>(0),
                )
                .optional()?;
            Ok(value)
        })?;
        raw.map(|raw| serde_json::from_str::<Entry>(&raw).map_err(VaultError::from))
            .transpose()
    }

    /// Rewrites an existing user entry in place, keeping its insertion slot.
    /// Returns `false` when no row carries `entry.id`.
    pub fn update_user_entry(&self, entry: &Entry) -> Result<bool> {
        let entry_json = encode_entry(entry)?;
        let now = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE user_entries SET entry_json = ?2, updated_at = ?3 WHERE id = ?1",
                params![entry.id, entry_json, now],
            )?;
            Ok(affected > 0)
        })
    }

    /// Deletes a user entry together with its favorite marker.
    pub fn delete_user_entry(&self, id: &str) -> Result<bool> {
        let removed = self.with_tx(|tx| {
            let affected = tx.execute("DELETE FROM user_entries WHERE id = ?1", params![id])?;
            if affected > 0 {
                tx.execute("DELETE FROM favorites WHERE entry_id = ?1", params![id])?;
            }
            Ok(affected > 0)
        })?;
        if removed {
            tracing::debug!(entry_id = id, "deleted user entry");
        }
        Ok(removed)
    }

    pub fn list_user_entries(&self) -> Result<Vec<Entry>> {
        let rows = self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT entry_json FROM user_entries ORDER BY seq ASC")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })?;
        decode_entries(rows)
    }

    pub fn count_user_entries(&self) -> Result<usize> {
        self.count_rows("user_entries")
    }
}
