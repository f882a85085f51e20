//! English dictionary API source.
//!
//! Queries the free JSON dictionary API, which answers with a list of
//! entries. Only the first entry is used.

use serde::Deserialize;

use crate::config::LookupConfig;
use crate::error::SourceError;
use crate::http;
use crate::source::DictionarySource;
use crate::types::{
    Definition, EnglishRecord, Meaning, Source, MAX_DEFINITIONS, MAX_EXAMPLES, MAX_RELATED_WORDS,
};

/// JSON dictionary API source.
pub struct EnglishSource;

impl DictionarySource for EnglishSource {
    type Record = EnglishRecord;

    async fn fetch(
        &self,
        client: &reqwest::Client,
        word: &str,
        config: &LookupConfig,
    ) -> Result<String, SourceError> {
        tracing::trace!(word, "English API lookup");
        let url = config.endpoint(Source::English, word)?;
        http::get_text(client, Source::English, url, None).await
    }

    fn parse(&self, payload: Option<&str>, _config: &LookupConfig) -> EnglishRecord {
        payload.map(parse_english_json).unwrap_or_default()
    }

    fn source(&self) -> Source {
        Source::English
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiEntry {
    word: Option<String>,
    phonetic: Option<String>,
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: Option<String>,
    definitions: Vec<ApiDefinition>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiDefinition {
    definition: Option<String>,
    example: Option<String>,
}

/// Parse the dictionary API JSON body into an [`EnglishRecord`].
///
/// Anything other than a non-empty JSON list of entries yields the empty
/// record. Extracted as a separate function for testability with fixtures.
pub fn parse_english_json(json: &str) -> EnglishRecord {
    let entries: Vec<ApiEntry> = match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(error = %e, "English payload is not an entry list");
            return EnglishRecord::default();
        }
    };
    let Some(entry) = entries.into_iter().next() else {
        return EnglishRecord::default();
    };

    let meanings: Vec<Meaning> = entry.meanings.into_iter().map(convert_meaning).collect();
    tracing::debug!(count = meanings.len(), "English meanings parsed");

    EnglishRecord {
        word: entry.word.unwrap_or_default(),
        phonetic: entry.phonetic.unwrap_or_default(),
        meanings,
    }
}

fn convert_meaning(meaning: ApiMeaning) -> Meaning {
    // Examples are gathered from every definition, not just the kept ones,
    // and may repeat the inline examples below.
    let examples = meaning
        .definitions
        .iter()
        .filter_map(|d| d.example.clone())
        .take(MAX_EXAMPLES)
        .collect();

    let definitions = meaning
        .definitions
        .into_iter()
        .take(MAX_DEFINITIONS)
        .map(|d| Definition {
            definition: d.definition.unwrap_or_default(),
            example: d.example.unwrap_or_default(),
        })
        .collect();

    Meaning {
        part_of_speech: meaning.part_of_speech.unwrap_or_default(),
        definitions,
        synonyms: meaning.synonyms.into_iter().take(MAX_RELATED_WORDS).collect(),
        antonyms: meaning.antonyms.into_iter().take(MAX_RELATED_WORDS).collect(),
        examples,
    }
}
