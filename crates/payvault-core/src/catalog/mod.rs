//! Catalog sources: the remote catalog fetched over HTTP and the embedded
//! catalog shipped as JSON files next to the vault.

mod embedded;
mod remote;

pub use embedded::EmbeddedCatalog;
pub use remote::RemoteCatalog;

use crate::models::Entry;

/// Entries gathered from every category that loaded, plus the categories
/// that failed and were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFetch {
    pub entries: Vec<Entry>,
    pub skipped: Vec<String>,
}

impl CatalogFetch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Category key as shown to users when a document omits its own category.
fn display_category(key: &str) -> String {
    key.to_ascii_uppercase()
}

#[cfg(test)]
mod tests;
