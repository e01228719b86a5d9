use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row, params};

use crate::error::{Result, VaultError};
use crate::models::Note;

use super::SqliteStore;

const NOTE_COLUMNS: &str = "id, entry_id, title, body, created_at, updated_at";

impl SqliteStore {
    pub fn insert_note(&self, note: &Note) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO notes(id, entry_id, title, body, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    note.id,
                    note.entry_id,
                    note.title,
                    note.body,
                    note.created_at.to_rfc3339(),
                    note.updated_at.to_rfc3339()
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let row = self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                    params![id],
                    read_note_row,
                )
                .optional()?;
            Ok(row)
        })?;
        row.map(NoteRow::into_note).transpose()
    }

    pub fn update_note(&self, note: &Note) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute(
                "UPDATE notes SET title = ?2, body = ?3, updated_at = ?4 WHERE id = ?1",
                params![note.id, note.title, note.body, note.updated_at.to_rfc3339()],
            )?;
            Ok(affected > 0)
        })
    }

    pub fn delete_note(&self, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
    }

    /// Notes newest-first, optionally restricted to one entry.
    pub fn list_notes(&self, entry_id: Option<&str>) -> Result<Vec<Note>> {
        let rows = self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                r"
                SELECT {NOTE_COLUMNS}
                FROM notes
                WHERE ?1 IS NULL OR entry_id = ?1
                ORDER BY created_at DESC, id ASC
                "
            ))?;
            let rows = stmt.query_map(params![entry_id], read_note_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })?;
        rows.into_iter().map(NoteRow::into_note).collect()
    }

    pub fn count_notes(&self) -> Result<usize> {
        self.count_rows("notes")
    }
}

struct NoteRow {
    id: String,
    entry_id: Option<String>,
    title: String,
    body: String,
    created_at: String,
    updated_at: String,
}

impl NoteRow {
    fn into_note(self) -> Result<Note> {
        Ok(Note {
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            id: self.id,
            entry_id: self.entry_id,
            title: self.title,
            body: self.body,
        })
    }
}

fn read_note_row(row: &Row<'_>) -> rusqlite::Result<NoteRow> {
    Ok(NoteRow {
        id: row.get(0)?,
        entry_id: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| VaultError::Internal(format!("invalid stored timestamp {raw}: {err}")))
}
