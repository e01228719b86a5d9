use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VaultError;

/// Category filter value meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            category: default_category(),
            subcategory: None,
        }
    }
}

impl SearchFilter {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
        }
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// The sentinel is matched case-insensitively (`"All"` and `"all"` both apply).
    #[must_use]
    pub fn is_all_categories(&self) -> bool {
        let category = self.category.trim();
        category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    #[must_use]
    pub fn subcategory_constraint(&self) -> Option<&str> {
        self.subcategory
            .as_deref()
            .filter(|subcategory| !subcategory.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring matching with additive field weights.
    #[default]
    Literal,
    /// Case-insensitive regular expression used as a per-field predicate.
    Regex,
}

impl MatchMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Regex => "regex",
        }
    }
}

impl FromStr for MatchMode {
    type Err = VaultError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "regex" => Ok(Self::Regex),
            other => Err(VaultError::Validation(format!(
                "invalid match mode: {other} (expected literal|regex)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    /// Keep the order produced by the search planner.
    #[default]
    Relevance,
    Title,
    FavoriteFirst,
    Recency,
    Level,
}

impl SortCriterion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Title => "title",
            Self::FavoriteFirst => "favorite-first",
            Self::Recency => "recency",
            Self::Level => "level",
        }
    }
}

impl FromStr for SortCriterion {
    type Err = VaultError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "relevance" | "none" => Ok(Self::Relevance),
            "title" => Ok(Self::Title),
            "favorite-first" | "favorites" => Ok(Self::FavoriteFirst),
            "recency" | "recent" => Ok(Self::Recency),
            "level" => Ok(Self::Level),
            other => Err(VaultError::Validation(format!(
                "invalid sort: {other} (expected relevance|title|favorite-first|recency|level)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filter: SearchFilter,
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default)]
    pub sort: SortCriterion,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}
