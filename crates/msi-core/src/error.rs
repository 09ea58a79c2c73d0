//! Error types for the MSI site

use thiserror::Error;

/// Main error type for site operations
///
/// Navigation never fails; these cover loading and validating site
/// configuration.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::SiteConfig`]
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but violates a constraint
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfig("duplicate path: /about".to_string());
        assert_eq!(format!("{}", err), "Invalid config: duplicate path: /about");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::Json(_)));
    }
}
