use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::RemoteConfig;
use crate::error::{Result, VaultError};
use crate::models::{Entry, EntrySource, VersionInfo};
use crate::normalize::normalize_document;

use super::{CatalogFetch, display_category};

#[derive(Clone)]
pub struct RemoteCatalog {
    base_url: String,
    categories: Vec<String>,
    http: Client,
}

impl std::fmt::Debug for RemoteCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCatalog")
            .field("base_url", &self.base_url)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64, categories: Vec<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            categories,
            http,
        })
    }

    /// Builds a client when a base URL is configured; `Ok(None)` otherwise.
    pub fn from_config(config: &RemoteConfig) -> Result<Option<Self>> {
        config
            .base_url
            .as_deref()
            .map(|base_url| Self::new(base_url, config.timeout_ms, config.categories.clone()))
            .transpose()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Reads `<base>/version.json`. A non-success status means "unknown"
    /// and yields `Ok(None)`; transport failures are errors.
    pub fn fetch_version(&self) -> Result<Option<VersionInfo>> {
        let url = format!("{}/version.json", self.base_url);
        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            tracing::debug!(status = %resp.status(), "remote version unavailable");
            return Ok(None);
        }
        let info = resp.json::<VersionInfo>()?;
        Ok(Some(info))
    }

    pub fn fetch_category(&self, category: &str) -> Result<Vec<Entry>> {
        let url = format!("{}/payloads/{category}.json", self.base_url);
        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(VaultError::NotFound(format!(
                "remote category {category} returned HTTP {}",
                resp.status()
            )));
        }
        let body = resp.text()?;
        normalize_document(&body, EntrySource::Remote, Some(&display_category(category)))
    }

    /// Fetches every configured category. Failing categories are logged and
    /// reported in `skipped`; they never abort the others.
    #[must_use]
    pub fn fetch_all(&self) -> CatalogFetch {
        let mut fetch = CatalogFetch::default();
        for category in &self.categories {
            match self.fetch_category(category) {
                Ok(entries) => {
                    tracing::debug!(category = %category, count = entries.len(), "fetched remote category");
                    fetch.entries.extend(entries);
                }
                Err(err) => {
                    tracing::warn!(category = %category, error = %err, "skipping remote category");
                    fetch.skipped.push(category.clone());
                }
            }
        }
        fetch
    }
}
