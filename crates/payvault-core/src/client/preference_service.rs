use crate::error::Result;
use crate::models::{Preferences, PreferencesPatch};
use crate::state::META_PREFERENCES_KEY;

use super::PayVault;

impl PayVault {
    /// Stored preferences, or defaults seeded with the configured match mode
    /// when nothing was saved yet.
    pub fn preferences(&self) -> Result<Preferences> {
        match self.state.get_system_value(META_PREFERENCES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Preferences {
                match_mode: self.config.match_mode,
                ..Preferences::default()
            }),
        }
    }

    pub fn set_preferences(&self, patch: PreferencesPatch) -> Result<Preferences> {
        let preferences = self.preferences()?.apply(patch);
        self.state
            .set_system_value(META_PREFERENCES_KEY, &serde_json::to_string(&preferences)?)?;
        Ok(preferences)
    }
}
