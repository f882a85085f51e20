//! CSS selectors for the scraped sources, keyed by semantic role.
//!
//! The HTML parsers only know about roles (entry, part of speech,
//! definition, example, ...). Which markup fills each role is plain
//! configuration, so a site redesign means new selector strings, not new
//! parsing code.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Selector roles for the Cambridge-style dictionary page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CambridgeSelectors {
    /// One dictionary entry (a part-of-speech section).
    pub entry: String,
    /// Part-of-speech label inside an entry.
    pub part_of_speech: String,
    /// A definition block inside an entry.
    pub definition_block: String,
    /// Definition text inside a definition block.
    pub definition: String,
    /// Example sentence inside a definition block.
    pub example: String,
}

impl Default for CambridgeSelectors {
    fn default() -> Self {
        Self {
            entry: "div.entry-body__el".into(),
            part_of_speech: "span.pos".into(),
            definition_block: "div.def-block.ddef_block".into(),
            definition: "div.def.ddef_d.db".into(),
            example: "span.eg.deg".into(),
        }
    }
}

/// Compiled form of [`CambridgeSelectors`].
pub(crate) struct CompiledCambridgeSelectors {
    pub entry: Selector,
    pub part_of_speech: Selector,
    pub definition_block: Selector,
    pub definition: Selector,
    pub example: Selector,
}

impl CambridgeSelectors {
    pub(crate) fn compile(&self) -> Result<CompiledCambridgeSelectors, SourceError> {
        Ok(CompiledCambridgeSelectors {
            entry: compile("entry", &self.entry)?,
            part_of_speech: compile("part_of_speech", &self.part_of_speech)?,
            definition_block: compile("definition_block", &self.definition_block)?,
            definition: compile("definition", &self.definition)?,
            example: compile("example", &self.example)?,
        })
    }

    /// Checks that every selector string parses.
    pub fn validate(&self) -> Result<(), SourceError> {
        self.compile().map(|_| ())
    }
}

/// Selector roles for the Bangla translation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BanglaSelectors {
    /// A Bangla meaning.
    pub meaning: String,
    /// The Bangla pronunciation.
    pub pronunciation: String,
}

impl Default for BanglaSelectors {
    fn default() -> Self {
        Self {
            meaning: "span.format1".into(),
            pronunciation: "span.prnc".into(),
        }
    }
}

/// Compiled form of [`BanglaSelectors`].
pub(crate) struct CompiledBanglaSelectors {
    pub meaning: Selector,
    pub pronunciation: Selector,
}

impl BanglaSelectors {
    pub(crate) fn compile(&self) -> Result<CompiledBanglaSelectors, SourceError> {
        Ok(CompiledBanglaSelectors {
            meaning: compile("meaning", &self.meaning)?,
            pronunciation: compile("pronunciation", &self.pronunciation)?,
        })
    }

    /// Checks that every selector string parses.
    pub fn validate(&self) -> Result<(), SourceError> {
        self.compile().map(|_| ())
    }
}

fn compile(role: &str, css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css)
        .map_err(|e| SourceError::Config(format!("invalid {role} selector {css:?}: {e:?}")))
}
