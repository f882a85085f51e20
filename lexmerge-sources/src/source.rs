//! Trait definition for the dictionary sources.
//!
//! Each source (English API, Bangla site, Cambridge site) implements
//! [`DictionarySource`]: a network fetch that may fail, and a pure parser
//! that never does.

use crate::config::LookupConfig;
use crate::error::SourceError;
use crate::types::Source;

/// One upstream dictionary source.
///
/// Implementors handle their own:
///
/// - URL construction from the configured template
/// - HTTP request with any headers the upstream requires
/// - Parsing of the raw payload into a normalized record
///
/// All implementations must be `Send + Sync` so the three sources can be
/// queried concurrently.
pub trait DictionarySource: Send + Sync {
    /// Normalized record produced by [`parse`](Self::parse).
    type Record: Default + Send;

    /// Fetch the raw payload for `word`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, timeout or a
    /// non-success status. Callers degrade this to an absent payload.
    fn fetch(
        &self,
        client: &reqwest::Client,
        word: &str,
        config: &LookupConfig,
    ) -> impl std::future::Future<Output = Result<String, SourceError>> + Send;

    /// Parse a raw payload. An absent or malformed payload yields
    /// [`Self::Record::default()`](Default::default).
    fn parse(&self, payload: Option<&str>, config: &LookupConfig) -> Self::Record;

    /// Returns which [`Source`] this implementation represents.
    fn source(&self) -> Source;
}

/// Fetch from `source`, logging and swallowing any failure.
pub async fn fetch_or_absent<S: DictionarySource>(
    source: &S,
    client: &reqwest::Client,
    word: &str,
    config: &LookupConfig,
) -> Option<String> {
    match source.fetch(client, word, config).await {
        Ok(payload) => {
            tracing::debug!(source = %source.source(), bytes = payload.len(), "source responded");
            Some(payload)
        }
        Err(err) => {
            tracing::warn!(source = %source.source(), error = %err, "source fetch failed");
            None
        }
    }
}
