//! Error types for the lexmerge-sources crate.
//!
//! These only surface at the edges of a lookup: invalid configuration or
//! an HTTP client that cannot be built. Per-source fetch and parse
//! failures are absorbed into empty records and never reach the caller.

/// Errors that can occur while fetching from a dictionary source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// An HTTP request to a source failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid lookup configuration, including selectors that do not parse.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for lexmerge-sources results.
pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SourceError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_config() {
        let err = SourceError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceError>();
    }
}
