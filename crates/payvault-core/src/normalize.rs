//! Maps source-specific catalog shapes onto the canonical [`Entry`].
//!
//! Catalog documents drifted over time: bodies appear under `payload`,
//! `code` or `body`, ids are sometimes numeric or missing, tags are
//! sometimes absent. All of that is resolved here so the search core only
//! ever sees one shape.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, VaultError};
use crate::models::{Entry, EntrySource, Level};

const UNCATEGORIZED: &str = "Uncategorized";
const DERIVED_ID_HEX_LEN: usize = 16;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
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
    pub level: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RawEntry {
    fn body_text(&self) -> Option<&str> {
        [&self.payload, &self.code, &self.body]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|text| !text.trim().is_empty())
    }

    fn id_text(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) => Some(id.trim().to_string()).filter(|id| !id.is_empty()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Converts one raw record into a canonical entry tagged with `source`.
///
/// Records without a title or without any body text are rejected (`None`).
/// `fallback_category` applies when the record carries no category of its own.
#[must_use]
pub fn normalize_entry(
    raw: RawEntry,
    source: EntrySource,
    fallback_category: Option<&str>,
) -> Option<Entry> {
    let title = raw.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return None;
    }
    let body = raw.body_text()?.to_string();
    let category = non_blank(raw.category.as_deref())
        .or_else(|| non_blank(fallback_category))
        .unwrap_or(UNCATEGORIZED)
        .to_string();
    let id = raw
        .id_text()
        .unwrap_or_else(|| derived_id(source, &category, title, &body));
    let level = raw.level.as_deref().and_then(|level| level.parse::<Level>().ok());

    Some(Entry {
        id,
        title: title.to_string(),
        body,
        category,
        subcategory: non_blank(raw.subcategory.as_deref()).map(ToString::to_string),
        tags: raw
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
        notes: non_blank(raw.notes.as_deref()).map(ToString::to_string),
        level,
        source,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    })
}

/// Parses a catalog document (`{ "payloads": [...] }` or a bare array) into
/// canonical entries. Malformed or incomplete records are skipped with a
/// warning; a document of the wrong shape is an error.
pub fn normalize_document(
    raw_json: &str,
    source: EntrySource,
    fallback_category: Option<&str>,
) -> Result<Vec<Entry>> {
    let document: Value = serde_json::from_str(raw_json)?;
    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("payloads") {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(VaultError::InvalidDocument(
                    "`payloads` must be an array".to_string(),
                ));
            }
            None => {
                return Err(VaultError::InvalidDocument(
                    "missing `payloads` array".to_string(),
                ));
            }
        },
        _ => {
            return Err(VaultError::InvalidDocument(
                "expected an object or an array".to_string(),
            ));
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let raw = match serde_json::from_value::<RawEntry>(record) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(position, error = %err, "skipping malformed catalog record");
                continue;
            }
        };
        match normalize_entry(raw, source, fallback_category) {
            Some(entry) => entries.push(entry),
            None => {
                tracing::warn!(position, "skipping catalog record without title or body");
            }
        }
    }
    Ok(entries)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn derived_id(source: EntrySource, category: &str, title: &str, body: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in [category, title, body] {
        hasher.update(part.as_bytes());
        hasher.update(&[0]);
    }
    let hex = hasher.finalize().to_hex();
    format!("{}-{}", source.as_str(), &hex[..DERIVED_ID_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_falls_back_from_payload_to_code_to_body() {
        let doc = r#"{"payloads": [
            {"id": "a", "title": "A", "payload": "p", "code": "c", "category": "XSS"},
            {"id": "b", "title": "B", "code": "c", "category": "XSS"},
            {"id": "c", "title": "C", "payload": "  ", "body": "b", "category": "XSS"}
        ]}"#;
        let entries = normalize_document(doc, EntrySource::Remote, None).expect("normalize");
        let bodies = entries.iter().map(|e| e.body.as_str()).collect::<Vec<_>>();
        assert_eq!(bodies, vec!["p", "c", "b"]);
    }

    #[test]
    fn records_without_title_or_body_are_skipped() {
        let doc = r#"{"payloads": [
            {"id": "a", "payload": "p"},
            {"id": "b", "title": "B"},
            {"id": "c", "title": "C", "payload": "ok"},
            {"id": "d", "title": 42}
        ]}"#;
        let entries = normalize_document(doc, EntrySource::Remote, Some("XSS")).expect("normalize");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "c");
        assert_eq!(entries[0].category, "XSS");
    }

    #[test]
    fn missing_ids_are_derived_deterministically() {
        let doc = r#"[{"title": "T", "payload": "P", "category": "SQLi"}]"#;
        let first = normalize_document(doc, EntrySource::Embedded, None).expect("first");
        let second = normalize_document(doc, EntrySource::Embedded, None).expect("second");
        assert_eq!(first[0].id, second[0].id);
        assert!(first[0].id.starts_with("embedded-"));
        assert_eq!(first[0].id.len(), "embedded-".len() + DERIVED_ID_HEX_LEN);
    }

    #[test]
    fn numeric_ids_and_loose_optional_fields_are_normalized() {
        let doc = r#"{"payloads": [{
            "id": 7, "title": "  Spaced  ", "payload": "x", "category": "LFI",
            "subcategory": " ", "tags": ["a", " ", "b"], "notes": "", "level": "HIGH",
            "source": "user"
        }]}"#;
        let entries = normalize_document(doc, EntrySource::Remote, None).expect("normalize");
        let entry = &entries[0];
        assert_eq!(entry.id, "7");
        assert_eq!(entry.title, "Spaced");
        assert_eq!(entry.subcategory, None);
        assert_eq!(entry.tags, vec!["a", "b"]);
        assert_eq!(entry.notes, None);
        assert_eq!(entry.level, Some(Level::High));
        assert_eq!(entry.source, EntrySource::Remote);
    }

    #[test]
    fn unknown_level_is_dropped_not_rejected() {
        let doc = r#"[{"id": "a", "title": "A", "payload": "p", "level": "critical"}]"#;
        let entries = normalize_document(doc, EntrySource::Remote, None).expect("normalize");
        assert_eq!(entries[0].level, None);
        assert_eq!(entries[0].category, UNCATEGORIZED);
    }

    #[test]
    fn wrong_document_shapes_are_errors() {
        assert!(matches!(
            normalize_document(r#"{"items": []}"#, EntrySource::Remote, None),
            Err(VaultError::InvalidDocument(_))
        ));
        assert!(matches!(
            normalize_document(r#"{"payloads": {}}"#, EntrySource::Remote, None),
            Err(VaultError::InvalidDocument(_))
        ));
        assert!(matches!(
            normalize_document("not json", EntrySource::Remote, None),
            Err(VaultError::Json(_))
        ));
    }
}
