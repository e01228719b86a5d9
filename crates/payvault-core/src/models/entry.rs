use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VaultError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Remote,
    Embedded,
    User,
}

impl EntrySource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Embedded => "embedded",
            Self::User => "user",
        }
    }

    /// Only entries authored by the local user may be edited or deleted.
    #[must_use]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Self::User)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl FromStr for Level {
    type Err = VaultError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(VaultError::Validation(format!(
                "invalid level: {other} (expected high|medium|low)"
            ))),
        }
    }
}

/// One snippet record in the catalog.
///
/// The body is serialized as `payload` so exported documents keep the same
/// shape as the catalog documents they were loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    #[serde(rename = "payload")]
    pub body: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    pub source: EntrySource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    #[must_use]
    pub fn subcategory_or_empty(&self) -> &str {
        self.subcategory.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn notes_or_empty(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}

/// An entry with its favorite status resolved for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: Entry,
    pub favorite: bool,
}

impl EntryView {
    #[must_use]
    pub const fn new(entry: Entry, favorite: bool) -> Self {
        Self { entry, favorite }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub title: String,
    #[serde(rename = "payload")]
    pub body: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
}

/// Partial update for a user entry. `Some("")` clears the optional text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "payload")]
    pub body: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
}

impl EntryPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.tags.is_none()
            && self.notes.is_none()
            && self.level.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_body_as_payload_with_camel_case_timestamps() {
        let entry = Entry {
            id: "user-1".to_string(),
            title: "Probe".to_string(),
            body: "<b>".to_string(),
            category: "XSS".to_string(),
            subcategory: None,
            tags: vec![],
            notes: None,
            level: Some(Level::High),
            source: EntrySource::User,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["payload"], "<b>");
        assert_eq!(value["source"], "user");
        assert_eq!(value["level"], "high");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none());
        assert!(value.get("subcategory").is_none());
    }

    #[test]
    fn entry_view_flattens_entry_fields() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "id": "xss-1",
            "title": "Alert",
            "payload": "alert(1)",
            "category": "XSS",
            "source": "remote"
        }))
        .expect("deserialize");
        let view = EntryView::new(entry, true);
        let value = serde_json::to_value(&view).expect("serialize view");
        assert_eq!(value["id"], "xss-1");
        assert_eq!(value["favorite"], true);
        assert_eq!(value["tags"], serde_json::json!([]));
    }

    #[test]
    fn level_parses_case_insensitively_and_rejects_unknown() {
        assert_eq!("HIGH".parse::<Level>().expect("high"), Level::High);
        assert_eq!(" low ".parse::<Level>().expect("low"), Level::Low);
        assert!("critical".parse::<Level>().is_err());
    }

    #[test]
    fn only_user_source_is_mutable() {
        assert!(EntrySource::User.is_mutable());
        assert!(!EntrySource::Remote.is_mutable());
        assert!(!EntrySource::Embedded.is_mutable());
    }
}
