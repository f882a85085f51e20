//! Lookup orchestrator: concurrent fetch of all sources, parse, merge.

use crate::config::LookupConfig;
use crate::error::SourceError;
use crate::http;
use crate::source::{fetch_or_absent, DictionarySource};
use crate::sources::{BanglaSource, CambridgeSource, EnglishSource};
use crate::types::WordLookup;

use super::merge::merge;

/// Look up `word` in all three sources.
///
/// # Pipeline
///
/// 1. Build one HTTP client carrying the per-source timeout
/// 2. Fetch English, Bangla and Cambridge concurrently; each fetch owns its
///    result and a failed one is logged and treated as absent
/// 3. Parse every payload (absent payloads parse to empty records)
/// 4. Merge into a [`WordLookup`]
///
/// # Errors
///
/// Returns [`SourceError::Http`] only if the HTTP client cannot be built.
/// Source failures never fail the lookup.
pub async fn orchestrate_lookup(
    word: &str,
    config: &LookupConfig,
) -> Result<WordLookup, SourceError> {
    let client = http::build_client(config)?;

    let (english, bangla, cambridge) = futures::future::join3(
        fetch_or_absent(&EnglishSource, &client, word, config),
        fetch_or_absent(&BanglaSource, &client, word, config),
        fetch_or_absent(&CambridgeSource, &client, word, config),
    )
    .await;

    let english = EnglishSource.parse(english.as_deref(), config);
    let bangla = BanglaSource.parse(bangla.as_deref(), config);
    let cambridge = CambridgeSource.parse(cambridge.as_deref(), config);
    if english.is_empty() && bangla.is_empty() && cambridge.definitions.is_empty() {
        tracing::info!("no source produced an entry");
    }

    let lookup = merge(word, &english, bangla, &cambridge);
    tracing::debug!(
        meanings = lookup.entry.meanings.len(),
        bangla_meanings = lookup.bangla.meanings.len(),
        "lookup merged"
    );
    Ok(lookup)
}
