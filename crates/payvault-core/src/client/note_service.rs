use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, VaultError};
use crate::models::{NewNote, Note, NotePatch};

use super::PayVault;

impl PayVault {
    pub fn add_note(&self, new_note: NewNote) -> Result<Note> {
        let title = new_note.title.trim();
        if title.is_empty() {
            return Err(VaultError::Validation("note title must not be empty".to_string()));
        }
        let now = Utc::now();
        let note = Note {
            id: format!("note-{}", Uuid::new_v4().simple()),
            entry_id: new_note
                .entry_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            title: title.to_string(),
            body: new_note.body,
            created_at: now,
            updated_at: now,
        };
        self.state.insert_note(&note)?;
        Ok(note)
    }

    pub fn notes(&self, entry_id: Option<&str>) -> Result<Vec<Note>> {
        self.state.list_notes(entry_id)
    }

    pub fn get_note(&self, id: &str) -> Result<Note> {
        self.state
            .get_note(id)?
            .ok_or_else(|| VaultError::NotFound(format!("note {id}")))
    }

    pub fn update_note(&self, id: &str, patch: NotePatch) -> Result<Note> {
        let mut note = self.get_note(id)?;
        if let Some(title) = patch.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(VaultError::Validation("note title must not be empty".to_string()));
            }
            note.title = title.to_string();
        }
        if let Some(body) = patch.body {
            note.body = body;
        }
        note.updated_at = Utc::now();
        if !self.state.update_note(&note)? {
            return Err(VaultError::NotFound(format!("note {id}")));
        }
        Ok(note)
    }

    pub fn delete_note(&self, id: &str) -> Result<()> {
        if !self.state.delete_note(id)? {
            return Err(VaultError::NotFound(format!("note {id}")));
        }
        Ok(())
    }
}
