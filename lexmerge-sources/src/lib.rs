//! # lexmerge-sources
//!
//! Looks an English word up in three dictionary sources and merges the
//! results into one structured entry.
//!
//! ## Design
//!
//! - Fetches a JSON dictionary API, a Bangla translation site and a
//!   Cambridge-style dictionary site concurrently
//! - Parses each payload into a normalized record; HTML is matched through
//!   configurable CSS selectors keyed by semantic role
//! - Merges the records by part of speech with fixed bounds on every list
//! - Graceful degradation: a source that fails or returns garbage simply
//!   contributes nothing
//!
//! No state survives a lookup: there is no cache and no global client.

pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod selectors;
pub mod source;
pub mod sources;
pub mod types;

pub use config::LookupConfig;
pub use error::{Result, SourceError};
pub use orchestrator::merge::{merge, merge_entry};
pub use selectors::{BanglaSelectors, CambridgeSelectors};
pub use source::DictionarySource;
pub use types::{
    BanglaRecord, CambridgeDefinition, CambridgeRecord, Definition, EnglishRecord, Meaning,
    MergedEntry, MergedMeaning, Source, WordLookup,
};

/// Look a word up in all sources and merge the results.
///
/// The three sources are queried concurrently. Any source that is
/// unreachable, times out, answers with a non-success status or returns a
/// malformed payload contributes an empty record; the lookup itself still
/// succeeds.
///
/// # Errors
///
/// Returns [`SourceError::Config`] if `config` is invalid, or
/// [`SourceError::Http`] if the HTTP client cannot be built.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lexmerge_sources::Result<()> {
/// let config = lexmerge_sources::LookupConfig::default();
/// let lookup = lexmerge_sources::lookup("run", &config).await?;
/// for meaning in &lookup.entry.meanings {
///     println!("{}: {} definitions", meaning.part_of_speech, meaning.definitions.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn lookup(word: &str, config: &LookupConfig) -> Result<WordLookup> {
    config.validate()?;
    orchestrator::lookup::orchestrate_lookup(word, config).await
}

/// Look a word up with the default public endpoints.
///
/// Convenience wrapper around [`lookup`] using [`LookupConfig::default()`].
///
/// # Errors
///
/// Same as [`lookup`].
pub async fn lookup_default(word: &str) -> Result<WordLookup> {
    lookup(word, &LookupConfig::default()).await
}

/// Run [`lookup`] as a background task on the current Tokio runtime.
///
/// Front ends await (or poll) the returned handle instead of blocking
/// their interactive thread. Aborting the handle abandons the in-flight
/// requests.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn spawn_lookup(
    word: impl Into<String>,
    config: LookupConfig,
) -> tokio::task::JoinHandle<Result<WordLookup>> {
    let word = word.into();
    tokio::spawn(async move { lookup(&word, &config).await })
}
