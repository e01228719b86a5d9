use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{EmbeddedCatalog, RemoteCatalog};
use crate::config::{AppConfig, EMBEDDED_DIR_NAME};
use crate::error::Result;
use crate::state::{STATE_DB_FILE, SqliteStore};

mod entry_service;
mod note_service;
mod preference_service;
mod search_service;
mod sync_service;

/// Repository facade over one vault root: assembles the corpus from the
/// catalog sources and the user's entries, and owns favorites, notes and
/// preferences through the state store.
#[derive(Clone)]
pub struct PayVault {
    pub state: SqliteStore,
    root: PathBuf,
    config: AppConfig,
    embedded: EmbeddedCatalog,
    remote: Option<RemoteCatalog>,
}

impl std::fmt::Debug for PayVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayVault")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl PayVault {
    /// Opens the vault at `root_dir` with configuration read from the
    /// environment.
    pub fn new(root_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(root_dir, AppConfig::from_env()?)
    }

    pub fn with_config(root_dir: impl Into<PathBuf>, config: AppConfig) -> Result<Self> {
        let root = root_dir.into();
        fs::create_dir_all(&root)?;
        let state = SqliteStore::open(root.join(STATE_DB_FILE))?;
        let embedded_dir = config
            .embedded_dir
            .clone()
            .unwrap_or_else(|| root.join(EMBEDDED_DIR_NAME));
        let embedded = EmbeddedCatalog::new(embedded_dir, config.remote.categories.clone());
        let remote = RemoteCatalog::from_config(&config.remote)?;

        Ok(Self {
            state,
            root,
            config,
            embedded,
            remote,
        })
    }

    /// Creates the embedded catalog directory so files can be dropped in.
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.embedded.dir())?;
        tracing::info!(root = %self.root.display(), "vault initialized");
        Ok(())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn embedded_dir(&self) -> &Path {
        self.embedded.dir()
    }
}
