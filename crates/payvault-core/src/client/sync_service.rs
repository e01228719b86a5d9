use chrono::Utc;

use crate::error::Result;
use crate::models::{SyncReport, VaultStatus};
use crate::state::{META_LAST_UPDATE_KEY, META_VERSION_KEY};

use super::PayVault;

const REMOTE_NOT_CONFIGURED: &str = "remote catalog is not configured";

impl PayVault {
    /// Refreshes the remote cache.
    ///
    /// Without `force` the fetch is skipped when the stored and remote
    /// versions agree. The cache is replaced only when at least one entry
    /// was fetched, so a failed sync never empties a working cache.
    pub fn sync(&self, force: bool) -> Result<SyncReport> {
        let Some(remote) = self.remote.as_ref() else {
            return Ok(SyncReport {
                error: Some(REMOTE_NOT_CONFIGURED.to_string()),
                ..SyncReport::default()
            });
        };

        if !force {
            match self.needs_update() {
                Ok(false) => {
                    tracing::info!("remote catalog already current");
                    return Ok(SyncReport {
                        success: true,
                        count: self.state.count_remote_entries()?,
                        version: self.state.get_system_value(META_VERSION_KEY)?,
                        ..SyncReport::default()
                    });
                }
                Ok(true) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "version check failed; fetching anyway");
                }
            }
        }

        let version = match remote.fetch_version() {
            Ok(info) => info.map(|info| info.version),
            Err(err) => {
                tracing::warn!(error = %err, "remote version unavailable");
                None
            }
        };
        let fetch = remote.fetch_all();
        if fetch.is_empty() {
            tracing::warn!(
                skipped = fetch.skipped.len(),
                "sync fetched no entries; keeping existing cache"
            );
            return Ok(SyncReport {
                success: false,
                count: 0,
                version,
                error: Some("no entries fetched from the remote catalog".to_string()),
                skipped_categories: fetch.skipped,
            });
        }

        let count = self.state.replace_remote_entries(&fetch.entries)?;
        if let Some(version) = version.as_deref() {
            self.state.set_system_value(META_VERSION_KEY, version)?;
        }
        self.state
            .set_system_value(META_LAST_UPDATE_KEY, &Utc::now().to_rfc3339())?;
        tracing::info!(count, version = version.as_deref().unwrap_or("unknown"), "sync complete");

        Ok(SyncReport {
            success: true,
            count,
            version,
            error: None,
            skipped_categories: fetch.skipped,
        })
    }

    /// True when either the stored or the remote version is unknown, or when
    /// they differ. A vault without a remote never needs an update.
    pub fn needs_update(&self) -> Result<bool> {
        let Some(remote) = self.remote.as_ref() else {
            return Ok(false);
        };
        let local = self.state.get_system_value(META_VERSION_KEY)?;
        let remote_version = remote.fetch_version()?.map(|info| info.version);
        Ok(match (local, remote_version) {
            (Some(local), Some(remote)) => local != remote,
            _ => true,
        })
    }

    pub fn status(&self) -> Result<VaultStatus> {
        let (origin, _) = self.base_entries()?;
        Ok(VaultStatus {
            origin,
            version: self.state.get_system_value(META_VERSION_KEY)?,
            last_update: self.state.get_system_value(META_LAST_UPDATE_KEY)?,
            remote_entries: self.state.count_remote_entries()?,
            user_entries: self.state.count_user_entries()?,
            favorites: self.state.count_favorites()?,
            notes: self.state.count_notes()?,
        })
    }
}
