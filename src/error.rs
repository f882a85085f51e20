//! Error types for the lexmerge application.

use lexmerge_sources::SourceError;

/// Top-level error type for the lookup front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input is not a single English word.
    #[error("invalid word {0:?}: use letters A-Z only")]
    InvalidWord(String),

    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The lookup could not be started.
    #[error("lookup error: {0}")]
    Source(#[from] SourceError),

    /// The background lookup task panicked or was cancelled.
    #[error("lookup task error: {0}")]
    Task(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_word() {
        let err = AppError::InvalidWord("r2d2".into());
        assert_eq!(err.to_string(), "invalid word \"r2d2\": use letters A-Z only");
    }

    #[test]
    fn source_error_converts() {
        let err: AppError = SourceError::Config("timeout_seconds must be greater than 0".into()).into();
        assert!(err.to_string().starts_with("lookup error: config error"));
    }

    #[test]
    fn io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppError>();
    }
}
