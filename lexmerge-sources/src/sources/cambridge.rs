//! Cambridge-style online dictionary source.
//!
//! The site refuses clients that do not look like a browser, so every
//! request carries a browser User-Agent. Definitions are scraped per entry
//! (one entry per part of speech) and per definition block.

use scraper::{ElementRef, Html};

use crate::config::LookupConfig;
use crate::error::SourceError;
use crate::http;
use crate::selectors::{CambridgeSelectors, CompiledCambridgeSelectors};
use crate::source::DictionarySource;
use crate::sources::text::{clean_definition, spaced_text, stripped_text};
use crate::types::{
    CambridgeDefinition, CambridgeRecord, Source, MAX_CAMBRIDGE_ENTRIES, MAX_DEFINITION_BLOCKS,
    MAX_EXAMPLES_PER_BLOCK,
};

/// Cambridge-style dictionary site scraper.
pub struct CambridgeSource;

impl DictionarySource for CambridgeSource {
    type Record = CambridgeRecord;

    async fn fetch(
        &self,
        client: &reqwest::Client,
        word: &str,
        config: &LookupConfig,
    ) -> Result<String, SourceError> {
        tracing::trace!(word, "Cambridge lookup");
        let url = config.endpoint(Source::Cambridge, word)?;
        let user_agent = http::browser_user_agent(config);
        http::get_text(client, Source::Cambridge, url, Some(&user_agent)).await
    }

    fn parse(&self, payload: Option<&str>, config: &LookupConfig) -> CambridgeRecord {
        payload
            .map(|html| parse_cambridge_html(html, &config.cambridge_selectors))
            .unwrap_or_default()
    }

    fn source(&self) -> Source {
        Source::Cambridge
    }
}

/// Parse the dictionary site HTML into a [`CambridgeRecord`].
///
/// Scans the first three entries and the first three definition blocks of
/// each. Definitions that clean down to nothing are dropped; the block's
/// examples are still collected under the entry's part of speech.
pub fn parse_cambridge_html(html: &str, selectors: &CambridgeSelectors) -> CambridgeRecord {
    let selectors = match selectors.compile() {
        Ok(compiled) => compiled,
        Err(e) => {
            tracing::warn!(error = %e, "Cambridge selectors rejected");
            return CambridgeRecord::default();
        }
    };
    let document = Html::parse_document(html);
    let mut record = CambridgeRecord::default();

    for entry in document.select(&selectors.entry).take(MAX_CAMBRIDGE_ENTRIES) {
        let pos = entry
            .select(&selectors.part_of_speech)
            .next()
            .map(|el| stripped_text(el).to_lowercase())
            .unwrap_or_default();

        for block in entry
            .select(&selectors.definition_block)
            .take(MAX_DEFINITION_BLOCKS)
        {
            parse_definition_block(block, &pos, &selectors, &mut record);
        }
    }

    tracing::debug!(
        definitions = record.definitions.len(),
        parts_of_speech = record.examples_by_pos.len(),
        "Cambridge definitions parsed"
    );
    record
}

fn parse_definition_block(
    block: ElementRef<'_>,
    pos: &str,
    selectors: &CompiledCambridgeSelectors,
    record: &mut CambridgeRecord,
) {
    if let Some(definition) = block.select(&selectors.definition).next() {
        let text = clean_definition(&spaced_text(definition));
        if !text.is_empty() {
            record.definitions.push(CambridgeDefinition {
                part_of_speech: pos.to_string(),
                definition: text,
            });
        }
    }

    for example in block
        .select(&selectors.example)
        .take(MAX_EXAMPLES_PER_BLOCK)
    {
        let text = spaced_text(example);
        if !text.is_empty() {
            record
                .examples_by_pos
                .entry(pos.to_string())
                .or_default()
                .push(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_CAMBRIDGE_HTML: &str = include_str!("../../test-data/cambridge.html");

    fn fixture() -> CambridgeRecord {
        parse_cambridge_html(FIXTURE_CAMBRIDGE_HTML, &CambridgeSelectors::default())
    }

    #[test]
    fn fixture_scans_three_entries_and_three_blocks() {
        let record = fixture();
        let texts: Vec<&str> = record
            .definitions
            .iter()
            .map(|d| d.definition.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "to move along, faster than walking by taking quick steps: ",
                "to operate or be in use",
                "an act of running",
                "to manage something",
            ]
        );
    }

    #[test]
    fn fixture_lowercases_part_of_speech() {
        let record = fixture();
        let parts: Vec<&str> = record
            .definitions
            .iter()
            .map(|d| d.part_of_speech.as_str())
            .collect();
        assert_eq!(parts, vec!["verb", "verb", "noun", "verb"]);
    }

    #[test]
    fn fixture_collects_two_examples_per_block_across_entries() {
        let record = fixture();
        assert_eq!(
            record.examples_by_pos["verb"],
            vec![
                "I ran to the station.",
                "She runs every morning.",
                "Example kept although the definition was dropped.",
                "He runs a small business.",
            ]
        );
        assert_eq!(
            record.examples_by_pos["noun"],
            vec!["I go for a run every morning."]
        );
        assert!(!record.examples_by_pos.contains_key("adjective"));
    }

    #[test]
    fn missing_part_of_speech_is_empty_key() {
        let html = r#"<div class="entry-body__el">
            <div class="def-block ddef_block">
                <div class="def ddef_d db">a thing</div>
                <span class="eg deg">An example.</span>
            </div>
        </div>"#;
        let record = parse_cambridge_html(html, &CambridgeSelectors::default());
        assert_eq!(record.definitions[0].part_of_speech, "");
        assert_eq!(record.examples_by_pos[""], vec!["An example."]);
    }

    #[test]
    fn block_without_definition_still_yields_examples() {
        let html = r#"<div class="entry-body__el">
            <span class="pos">noun</span>
            <div class="def-block ddef_block"><span class="eg deg">Only an example.</span></div>
        </div>"#;
        let record = parse_cambridge_html(html, &CambridgeSelectors::default());
        assert!(record.definitions.is_empty());
        assert_eq!(record.examples_by_pos["noun"], vec!["Only an example."]);
    }

    #[test]
    fn blank_examples_are_dropped() {
        let html = r#"<div class="entry-body__el">
            <span class="pos">noun</span>
            <div class="def-block ddef_block">
                <div class="def ddef_d db">a thing</div>
                <span class="eg deg">   </span>
            </div>
        </div>"#;
        let record = parse_cambridge_html(html, &CambridgeSelectors::default());
        assert!(record.examples_by_pos.is_empty());
    }

    #[test]
    fn page_without_entries_yields_empty_record() {
        let record = parse_cambridge_html(
            "<html><body><h1>Search results</h1></body></html>",
            &CambridgeSelectors::default(),
        );
        assert_eq!(record, CambridgeRecord::default());
    }

    #[test]
    fn invalid_selector_yields_empty_record() {
        let selectors = CambridgeSelectors {
            definition: "div[".into(),
            ..Default::default()
        };
        let record = parse_cambridge_html(FIXTURE_CAMBRIDGE_HTML, &selectors);
        assert_eq!(record, CambridgeRecord::default());
    }

    #[test]
    fn absent_payload_yields_empty_record() {
        let record = CambridgeSource.parse(None, &LookupConfig::default());
        assert_eq!(record, CambridgeRecord::default());
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CambridgeSource>();
    }

    #[tokio::test]
    #[ignore] // Live test: run with `cargo test -- --ignored`
    async fn live_cambridge_lookup() {
        let config = LookupConfig::default();
        let client = http::build_client(&config).expect("client");
        let body = CambridgeSource
            .fetch(&client, "run", &config)
            .await
            .expect("live site should answer");
        let record = CambridgeSource.parse(Some(&body), &config);
        assert!(!record.definitions.is_empty());
    }
}
