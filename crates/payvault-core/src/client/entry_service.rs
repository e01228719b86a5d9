use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, VaultError};
use crate::models::{
    ALL_CATEGORIES, Entry, EntryPatch, EntrySource, EntryView, ExportDocument, Level, NewEntry,
};
use crate::normalize::normalize_document;

use super::PayVault;

const DEFAULT_USER_SUBCATEGORY: &str = "Custom";
const DEFAULT_USER_LEVEL: Level = Level::Medium;

impl PayVault {
    pub fn get_entry(&self, id: &str) -> Result<EntryView> {
        let entry = self
            .corpus()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| VaultError::NotFound(format!("entry {id}")))?;
        let favorite = self.state.is_favorite(id)?;
        Ok(EntryView::new(entry, favorite))
    }

    pub fn add_entry(&self, new_entry: NewEntry) -> Result<Entry> {
        let now = Utc::now();
        let entry = Entry {
            id: new_user_entry_id(),
            title: required_text("title", &new_entry.title)?,
            body: required_body(&new_entry.body)?,
            category: required_category(&new_entry.category)?,
            subcategory: Some(
                optional_text(new_entry.subcategory.as_deref())
                    .unwrap_or_else(|| DEFAULT_USER_SUBCATEGORY.to_string()),
            ),
            tags: clean_tags(new_entry.tags),
            notes: optional_text(new_entry.notes.as_deref()),
            level: Some(new_entry.level.unwrap_or(DEFAULT_USER_LEVEL)),
            source: EntrySource::User,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.state.insert_user_entry(&entry)?;
        tracing::info!(entry_id = %entry.id, category = %entry.category, "added user entry");
        Ok(entry)
    }

    pub fn update_entry(&self, id: &str, patch: EntryPatch) -> Result<Entry> {
        if patch.is_empty() {
            return Err(VaultError::Validation(
                "entry update carries no changes".to_string(),
            ));
        }
        let mut entry = self.mutable_entry(id)?;

        if let Some(title) = patch.title {
            entry.title = required_text("title", &title)?;
        }
        if let Some(body) = patch.body {
            entry.body = required_body(&body)?;
        }
        if let Some(category) = patch.category {
            entry.category = required_category(&category)?;
        }
        if let Some(subcategory) = patch.subcategory {
            entry.subcategory = optional_text(Some(&subcategory));
        }
        if let Some(tags) = patch.tags {
            entry.tags = clean_tags(tags);
        }
        if let Some(notes) = patch.notes {
            entry.notes = optional_text(Some(&notes));
        }
        if let Some(level) = patch.level {
            entry.level = Some(level);
        }
        entry.updated_at = Some(Utc::now());

        if !self.state.update_user_entry(&entry)? {
            return Err(VaultError::NotFound(format!("entry {id}")));
        }
        tracing::info!(entry_id = id, "updated user entry");
        Ok(entry)
    }

    pub fn delete_entry(&self, id: &str) -> Result<()> {
        self.mutable_entry(id)?;
        if !self.state.delete_user_entry(id)? {
            return Err(VaultError::NotFound(format!("entry {id}")));
        }
        tracing::info!(entry_id = id, "deleted user entry");
        Ok(())
    }

    /// Flips the favorite flag of an entry present in the corpus and returns
    /// the new state.
    pub fn toggle_favorite(&self, id: &str) -> Result<bool> {
        if !self.corpus()?.iter().any(|entry| entry.id == id) {
            return Err(VaultError::NotFound(format!("entry {id}")));
        }
        let favorite = self.state.toggle_favorite(id)?;
        tracing::debug!(entry_id = id, favorite, "toggled favorite");
        Ok(favorite)
    }

    pub fn is_favorite(&self, id: &str) -> Result<bool> {
        self.state.is_favorite(id)
    }

    /// Favorite entries in the order they were marked. Markers whose entry
    /// left the corpus are skipped.
    pub fn favorites(&self) -> Result<Vec<EntryView>> {
        let corpus = self.corpus()?;
        Ok(self
            .state
            .list_favorites()?
            .into_iter()
            .filter_map(|id| corpus.iter().find(|entry| entry.id == id).cloned())
            .map(|entry| EntryView::new(entry, true))
            .collect())
    }

    pub fn export_user_entries(&self) -> Result<ExportDocument> {
        let payloads = self.state.list_user_entries()?;
        Ok(ExportDocument {
            exported_at: Utc::now(),
            count: payloads.len(),
            payloads,
        })
    }

    /// Imports user entries from an exported document (or any catalog
    /// document). Every imported entry gets a fresh id and `user` source;
    /// the batch is written atomically.
    pub fn import_user_entries(&self, raw_json: &str) -> Result<usize> {
        let now = Utc::now();
        let entries = normalize_document(raw_json, EntrySource::User, None)?
            .into_iter()
            .map(|entry| Entry {
                id: new_user_entry_id(),
                source: EntrySource::User,
                created_at: entry.created_at.or(Some(now)),
                updated_at: Some(now),
                ..entry
            })
            .collect::<Vec<_>>();
        let imported = self.state.insert_user_entries(&entries)?;
        tracing::info!(count = imported, "imported user entries");
        Ok(imported)
    }

    fn mutable_entry(&self, id: &str) -> Result<Entry> {
        if let Some(entry) = self.state.get_user_entry(id)? {
            return Ok(entry);
        }
        match self.corpus()?.into_iter().find(|entry| entry.id == id) {
            Some(entry) if !entry.source.is_mutable() => Err(VaultError::PermissionDenied(format!(
                "{} entry {id} is read-only",
                entry.source.as_str()
            ))),
            _ => Err(VaultError::NotFound(format!("entry {id}"))),
        }
    }
}

fn new_user_entry_id() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}

fn required_text(field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(VaultError::Validation(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

// Bodies keep their whitespace; only an all-blank body is rejected.
fn required_body(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(VaultError::Validation("payload must not be empty".to_string()));
    }
    Ok(raw.to_string())
}

fn required_category(raw: &str) -> Result<String> {
    let category = required_text("category", raw)?;
    if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return Err(VaultError::Validation(format!(
            "category `{category}` is reserved"
        )));
    }
    Ok(category)
}

fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
