use serde::{Deserialize, Serialize};

use super::{MatchMode, SortCriterion};

const DEFAULT_THEME: &str = "dark";
const DEFAULT_FONT_SIZE: u16 = 13;
pub const MIN_FONT_SIZE: u16 = 10;
pub const MAX_FONT_SIZE: u16 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub match_mode: MatchMode,
    pub sort: SortCriterion,
    pub theme: String,
    pub font_size: u16,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Literal,
            sort: SortCriterion::Relevance,
            theme: DEFAULT_THEME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn apply(mut self, patch: PreferencesPatch) -> Self {
        if let Some(match_mode) = patch.match_mode {
            self.match_mode = match_mode;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        if let Some(theme) = patch
            .theme
            .map(|theme| theme.trim().to_string())
            .filter(|theme| !theme.is_empty())
        {
            self.theme = theme;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(default)]
    pub match_mode: Option<MatchMode>,
    #[serde(default)]
    pub sort: Option<SortCriterion>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub font_size: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_clamps_font_size_and_ignores_blank_theme() {
        let prefs = Preferences::default().apply(PreferencesPatch {
            theme: Some("  ".to_string()),
            font_size: Some(99),
            ..PreferencesPatch::default()
        });
        assert_eq!(prefs.theme, DEFAULT_THEME);
        assert_eq!(prefs.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"sort":"title"}"#).expect("partial preferences");
        assert_eq!(prefs.sort, SortCriterion::Title);
        assert_eq!(prefs.match_mode, MatchMode::Literal);
        assert_eq!(prefs.font_size, DEFAULT_FONT_SIZE);
    }
}
