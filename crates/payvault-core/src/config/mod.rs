use std::path::PathBuf;

use crate::error::{Result, VaultError};
use crate::models::MatchMode;

mod env;

use env::{parse_list, read_non_empty_env, read_raw_env};

pub const ENV_REMOTE_BASE_URL: &str = "PAYVAULT_REMOTE_BASE_URL";
pub const ENV_REMOTE_TIMEOUT_MS: &str = "PAYVAULT_REMOTE_TIMEOUT_MS";
pub const ENV_CATEGORIES: &str = "PAYVAULT_CATEGORIES";
pub const ENV_EMBEDDED_DIR: &str = "PAYVAULT_EMBEDDED_DIR";
pub const ENV_MATCH_MODE: &str = "PAYVAULT_MATCH_MODE";

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "xss",
    "sqli",
    "ssrf",
    "lfi",
    "rfi",
    "cmdi",
    "ssti",
    "open_redirect",
    "csrf",
    "2fa_bypass",
    "waf_bypass",
];
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 10_000;
pub const EMBEDDED_DIR_NAME: &str = "payloads";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Catalog root serving `version.json` and `payloads/<category>.json`.
    /// `None` disables sync.
    pub base_url: Option<String>,
    pub timeout_ms: u64,
    pub categories: Vec<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
            categories: default_categories(),
        }
    }
}

impl RemoteConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: read_non_empty_env(ENV_REMOTE_BASE_URL).map(|url| normalize_base_url(&url)),
            timeout_ms: parse_timeout_ms(read_raw_env(ENV_REMOTE_TIMEOUT_MS).as_deref())?,
            categories: parse_categories(read_raw_env(ENV_CATEGORIES).as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    /// Overrides `<root>/payloads` as the embedded catalog directory.
    pub embedded_dir: Option<PathBuf>,
    /// Match mode used when neither the caller nor stored preferences pick one.
    pub match_mode: MatchMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            remote: RemoteConfig::from_env()?,
            embedded_dir: read_non_empty_env(ENV_EMBEDDED_DIR).map(PathBuf::from),
            match_mode: parse_match_mode(read_raw_env(ENV_MATCH_MODE).as_deref())?,
        })
    }

    #[must_use]
    pub fn with_remote_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.remote.base_url = Some(normalize_base_url(base_url.as_ref()));
        self
    }

    #[must_use]
    pub fn with_embedded_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.embedded_dir = Some(dir.into());
        self
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|category| (*category).to_string())
        .collect()
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_timeout_ms(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(DEFAULT_REMOTE_TIMEOUT_MS);
    };
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(VaultError::Validation(format!(
            "invalid {ENV_REMOTE_TIMEOUT_MS}: {raw} (expected a positive integer)"
        ))),
    }
}

fn parse_categories(raw: Option<&str>) -> Vec<String> {
    let parsed = raw.map(parse_list).unwrap_or_default();
    if parsed.is_empty() {
        default_categories()
    } else {
        parsed
    }
}

fn parse_match_mode(raw: Option<&str>) -> Result<MatchMode> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(MatchMode::default()),
        Some(raw) => raw.parse::<MatchMode>().map_err(|_| {
            VaultError::Validation(format!(
                "invalid {ENV_MATCH_MODE}: {raw} (expected literal|regex)"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset_and_rejects_garbage() {
        assert_eq!(parse_timeout_ms(None).expect("unset"), DEFAULT_REMOTE_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(Some(" ")).expect("blank"), DEFAULT_REMOTE_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(Some("2500")).expect("value"), 2500);
        assert!(matches!(
            parse_timeout_ms(Some("soon")),
            Err(VaultError::Validation(_))
        ));
        assert!(matches!(
            parse_timeout_ms(Some("0")),
            Err(VaultError::Validation(_))
        ));
    }

    #[test]
    fn categories_parse_comma_list_and_fall_back_to_defaults() {
        assert_eq!(
            parse_categories(Some(" xss, sqli ,,xss ")),
            vec!["xss".to_string(), "sqli".to_string()]
        );
        assert_eq!(parse_categories(Some(" , ")).len(), DEFAULT_CATEGORIES.len());
        assert_eq!(parse_categories(None)[0], "xss");
    }

    #[test]
    fn match_mode_parses_known_values_only() {
        assert_eq!(parse_match_mode(None).expect("unset"), MatchMode::Literal);
        assert_eq!(parse_match_mode(Some("REGEX")).expect("regex"), MatchMode::Regex);
        let err = parse_match_mode(Some("fuzzy")).expect_err("unknown mode");
        assert!(err.to_string().contains(ENV_MATCH_MODE));
    }

    #[test]
    fn builder_helpers_normalize_base_url() {
        let config = AppConfig::default()
            .with_remote_base_url("https://catalog.example/main/")
            .with_embedded_dir("/tmp/catalog");
        assert_eq!(
            config.remote.base_url.as_deref(),
            Some("https://catalog.example/main")
        );
        assert_eq!(config.embedded_dir, Some(PathBuf::from("/tmp/catalog")));
    }
}
