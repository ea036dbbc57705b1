use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures of the OS theme bridge. All of them are recovered by probing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Theme bridge unavailable: {0}")]
    Unavailable(String),

    #[error("OS theme detection failed: {0}")]
    Detection(String),
}

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to persist theme preference: {0}")]
    Storage(#[from] AppError),

    #[error("use_theme must be used within a ThemeProvider")]
    OutsideProvider,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme preference: {0:?}")]
pub struct ParsePreferenceError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("no data directory".to_string());
        assert_eq!(err.to_string(), "Settings error: no data directory");

        let err = BridgeError::Unavailable("disabled".to_string());
        assert_eq!(err.to_string(), "Theme bridge unavailable: disabled");

        let err = ThemeError::OutsideProvider;
        assert_eq!(err.to_string(), "use_theme must be used within a ThemeProvider");
    }

    #[test]
    fn test_storage_error_wraps_app_error() {
        let err: ThemeError = AppError::Settings("read-only".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Failed to persist theme preference: Settings error: read-only"
        );
    }
}
