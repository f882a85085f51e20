//! Core record types shared by the parsers and the merge engine.
//!
//! Every record is a plain value built once per lookup. Parsers produce the
//! per-source records; the merge engine turns them into a [`MergedEntry`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum definitions kept per meaning.
pub const MAX_DEFINITIONS: usize = 3;
/// Maximum examples kept per meaning.
pub const MAX_EXAMPLES: usize = 3;
/// Maximum synonyms (and, separately, antonyms) kept per meaning.
pub const MAX_RELATED_WORDS: usize = 5;
/// Maximum Bangla meanings kept.
pub const MAX_BANGLA_MEANINGS: usize = 3;
/// Maximum Cambridge entry blocks scanned.
pub const MAX_CAMBRIDGE_ENTRIES: usize = 3;
/// Maximum definition blocks scanned per Cambridge entry.
pub const MAX_DEFINITION_BLOCKS: usize = 3;
/// Maximum examples collected per Cambridge definition block.
pub const MAX_EXAMPLES_PER_BLOCK: usize = 2;

/// The three upstream dictionary sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Public JSON dictionary API (definitions, phonetics, synonyms).
    English,
    /// English to Bangla translation site.
    Bangla,
    /// Cambridge-style online dictionary site.
    Cambridge,
}

impl Source {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Bangla => "Bangla",
            Self::Cambridge => "Cambridge",
        }
    }

    /// Returns all source variants.
    pub fn all() -> &'static [Source] {
        &[Self::English, Self::Bangla, Self::Cambridge]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single definition with its optional inline example (empty when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: String,
}

impl Definition {
    /// A definition without an inline example.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            example: String::new(),
        }
    }
}

/// One part-of-speech section of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub examples: Vec<String>,
}

/// A merged meaning has the same shape as an English API meaning.
pub type MergedMeaning = Meaning;

/// Normalized result of the English dictionary API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishRecord {
    pub word: String,
    pub phonetic: String,
    pub meanings: Vec<Meaning>,
}

impl EnglishRecord {
    /// Returns `true` when the source produced nothing.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty() && self.phonetic.is_empty() && self.meanings.is_empty()
    }
}

/// Normalized result of the Bangla translation site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanglaRecord {
    pub meanings: Vec<String>,
    pub pronunciation: String,
}

impl BanglaRecord {
    /// Returns `true` when the source produced nothing.
    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty() && self.pronunciation.is_empty()
    }
}

/// A definition scraped from the dictionary site, tagged with its part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CambridgeDefinition {
    pub part_of_speech: String,
    pub definition: String,
}

/// Normalized result of the Cambridge-style dictionary site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CambridgeRecord {
    pub definitions: Vec<CambridgeDefinition>,
    /// Example sentences keyed by lowercased part of speech.
    pub examples_by_pos: BTreeMap<String, Vec<String>>,
}

/// The final entry, grouped by part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub word: String,
    pub phonetic: String,
    pub meanings: Vec<MergedMeaning>,
}

impl MergedEntry {
    /// An entry with no phonetic and no meanings.
    pub fn empty(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }
}

/// Everything a lookup produces: the merged entry plus the Bangla record,
/// which has no part-of-speech axis and travels alongside unmerged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLookup {
    pub entry: MergedEntry,
    pub bangla: BanglaRecord,
}

impl WordLookup {
    /// Returns `true` when no source contributed anything displayable.
    pub fn is_empty(&self) -> bool {
        self.entry.meanings.is_empty() && self.entry.phonetic.is_empty() && self.bangla.is_empty()
    }
}
