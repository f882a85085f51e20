//! English to Bangla translation site source.
//!
//! The page lists Bangla meanings in `format1` spans and the Bangla
//! pronunciation in a `prnc` span (both configurable via
//! [`BanglaSelectors`](crate::selectors::BanglaSelectors)).

use scraper::Html;

use crate::config::LookupConfig;
use crate::error::SourceError;
use crate::http;
use crate::selectors::BanglaSelectors;
use crate::source::DictionarySource;
use crate::sources::text::stripped_text;
use crate::types::{BanglaRecord, Source, MAX_BANGLA_MEANINGS};

/// Bangla translation site scraper.
pub struct BanglaSource;

impl DictionarySource for BanglaSource {
    type Record = BanglaRecord;

    async fn fetch(
        &self,
        client: &reqwest::Client,
        word: &str,
        config: &LookupConfig,
    ) -> Result<String, SourceError> {
        tracing::trace!(word, "Bangla lookup");
        let url = config.endpoint(Source::Bangla, word)?;
        http::get_text(client, Source::Bangla, url, None).await
    }

    fn parse(&self, payload: Option<&str>, config: &LookupConfig) -> BanglaRecord {
        payload
            .map(|html| parse_bangla_html(html, &config.bangla_selectors))
            .unwrap_or_default()
    }

    fn source(&self) -> Source {
        Source::Bangla
    }
}

/// Parse the Bangla site HTML into a [`BanglaRecord`].
///
/// Missing elements yield empty fields; an unparseable selector yields the
/// empty record.
pub fn parse_bangla_html(html: &str, selectors: &BanglaSelectors) -> BanglaRecord {
    let selectors = match selectors.compile() {
        Ok(compiled) => compiled,
        Err(e) => {
            tracing::warn!(error = %e, "Bangla selectors rejected");
            return BanglaRecord::default();
        }
    };
    let document = Html::parse_document(html);

    let meanings: Vec<String> = document
        .select(&selectors.meaning)
        .take(MAX_BANGLA_MEANINGS)
        .map(stripped_text)
        .collect();

    let pronunciation = document
        .select(&selectors.pronunciation)
        .next()
        .map(stripped_text)
        .unwrap_or_default();

    tracing::debug!(count = meanings.len(), "Bangla meanings parsed");
    BanglaRecord {
        meanings,
        pronunciation,
    }
}
