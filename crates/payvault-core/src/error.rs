use thiserror::Error;

pub type Result<T> = std::result::Result<T, VaultError>;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid catalog document: {0}")]
    InvalidDocument(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl VaultError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::InvalidDocument(_) => "INVALID_DOCUMENT",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Sqlite(_) => "SQLITE_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub(crate) fn mutex_poisoned(resource: &str) -> Self {
        Self::Internal(format!("{resource} lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable_for_domain_variants() {
        assert_eq!(VaultError::NotFound("x".to_string()).code(), "NOT_FOUND");
        assert_eq!(
            VaultError::PermissionDenied("x".to_string()).code(),
            "PERMISSION_DENIED"
        );
        assert_eq!(
            VaultError::InvalidPattern("(".to_string()).code(),
            "INVALID_PATTERN"
        );
    }

    #[test]
    fn transparent_variants_keep_source_message() {
        let err = VaultError::from(std::io::Error::other("disk gone"));
        assert_eq!(err.code(), "IO_ERROR");
        assert_eq!(err.to_string(), "disk gone");
    }
}
