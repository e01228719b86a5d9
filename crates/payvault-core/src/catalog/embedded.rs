use std::fs;
use std::path::{Path, PathBuf};

use crate::error::VaultError;
use crate::models::EntrySource;
use crate::normalize::normalize_document;

use super::{CatalogFetch, display_category};

/// Read-only catalog stored as `<dir>/<category>.json` documents.
#[derive(Debug, Clone)]
pub struct EmbeddedCatalog {
    dir: PathBuf,
    categories: Vec<String>,
}

impl EmbeddedCatalog {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, categories: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            categories,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads every category document that exists. Missing files are not an
    /// error; unreadable or malformed ones are skipped with a warning.
    #[must_use]
    pub fn load(&self) -> CatalogFetch {
        let mut fetch = CatalogFetch::default();
        for category in &self.categories {
            let path = self.dir.join(format!("{category}.json"));
            if !path.is_file() {
                continue;
            }
            let loaded = fs::read_to_string(&path)
                .map_err(VaultError::from)
                .and_then(|raw| {
                    normalize_document(
                        &raw,
                        EntrySource::Embedded,
                        Some(&display_category(category)),
                    )
                });
            match loaded {
                Ok(entries) => fetch.entries.extend(entries),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping embedded catalog file");
                    fetch.skipped.push(category.clone());
                }
            }
        }
        fetch
    }
}
