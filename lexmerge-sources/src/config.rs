//! Lookup configuration with sensible defaults.
//!
//! [`LookupConfig`] controls the endpoint templates, the per-source read
//! timeout, the dictionary-site User-Agent, and the selector roles used by
//! the HTML parsers.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SourceError;
use crate::selectors::{BanglaSelectors, CambridgeSelectors};
use crate::types::Source;

/// Placeholder replaced by the percent-encoded word in endpoint templates.
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Configuration for a lookup.
///
/// Use [`Default::default()`] for the public endpoints, or override fields
/// (tests point the templates at a local mock server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// English dictionary API endpoint template.
    pub english_url: String,
    /// Bangla translation site endpoint template.
    pub bangla_url: String,
    /// Cambridge-style dictionary site endpoint template.
    pub cambridge_url: String,
    /// Per-source HTTP read timeout in seconds.
    pub timeout_seconds: u64,
    /// Browser User-Agent sent to the dictionary site. If `None`, one is
    /// picked from a built-in list of realistic browser User-Agents.
    pub user_agent: Option<String>,
    pub bangla_selectors: BanglaSelectors,
    pub cambridge_selectors: CambridgeSelectors,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            english_url: "https://api.dictionaryapi.dev/api/v2/entries/en/{word}".into(),
            bangla_url: "https://www.english-bangla.com/dictionary/{word}".into(),
            cambridge_url: "https://dictionary.cambridge.org/dictionary/english/{word}".into(),
            timeout_seconds: 10,
            user_agent: None,
            bangla_selectors: BanglaSelectors::default(),
            cambridge_selectors: CambridgeSelectors::default(),
        }
    }
}

impl LookupConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - every endpoint template contains `{word}` and is an absolute http(s) URL
    /// - every selector string parses
    pub fn validate(&self) -> Result<(), SourceError> {
        if self.timeout_seconds == 0 {
            return Err(SourceError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        for source in Source::all() {
            let template = self.template(*source);
            if !template.contains(WORD_PLACEHOLDER) {
                return Err(SourceError::Config(format!(
                    "{source} endpoint must contain {WORD_PLACEHOLDER}"
                )));
            }
            self.endpoint(*source, "word")?;
        }
        if matches!(self.user_agent.as_deref(), Some(ua) if ua.trim().is_empty()) {
            return Err(SourceError::Config("user_agent must not be blank".into()));
        }
        self.bangla_selectors.validate()?;
        self.cambridge_selectors.validate()?;
        Ok(())
    }

    /// Returns the endpoint template for `source`.
    pub fn template(&self, source: Source) -> &str {
        match source {
            Source::English => &self.english_url,
            Source::Bangla => &self.bangla_url,
            Source::Cambridge => &self.cambridge_url,
        }
    }

    /// Builds the request URL for `word` on `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] if the expanded template is not an
    /// absolute http(s) URL.
    pub fn endpoint(&self, source: Source, word: &str) -> Result<Url, SourceError> {
        let expanded = self
            .template(source)
            .replace(WORD_PLACEHOLDER, &urlencoding::encode(word));
        let url = Url::parse(&expanded)
            .map_err(|e| SourceError::Config(format!("invalid {source} endpoint: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SourceError::Config(format!(
                "{source} endpoint has unsupported scheme {other:?}"
            ))),
        }
    }
}
