//! Merge engine: reconcile the per-source records into one entry.
//!
//! The dictionary site decides which parts of speech exist and supplies
//! definitions and examples; the English API contributes the phonetic and
//! the synonyms/antonyms of the matching part of speech. When the site
//! yields no definitions the English record is used as is.

use crate::types::{
    BanglaRecord, CambridgeRecord, Definition, EnglishRecord, MergedEntry, MergedMeaning,
    WordLookup, MAX_DEFINITIONS, MAX_EXAMPLES, MAX_RELATED_WORDS,
};

/// Merge the three records of one lookup.
///
/// The Bangla record has no part-of-speech axis, so it is attached to the
/// result unchanged next to the merged entry.
pub fn merge(
    word: &str,
    english: &EnglishRecord,
    bangla: BanglaRecord,
    cambridge: &CambridgeRecord,
) -> WordLookup {
    WordLookup {
        entry: merge_entry(word, english, cambridge),
        bangla,
    }
}

/// Build the [`MergedEntry`] for `word`.
///
/// # Pipeline
///
/// 1. No site definitions: return the English record verbatim, renamed to `word`
/// 2. Group site definitions by lowercased part of speech, first-seen order
/// 3. Keep the first three definitions of each group
/// 4. Attach up to three site examples for the group's part of speech
/// 5. Attach synonyms/antonyms of the first English meaning with the same
///    part of speech (case-insensitive), or none
pub fn merge_entry(word: &str, english: &EnglishRecord, cambridge: &CambridgeRecord) -> MergedEntry {
    if cambridge.definitions.is_empty() {
        return MergedEntry {
            word: word.to_string(),
            phonetic: english.phonetic.clone(),
            meanings: english.meanings.clone(),
        };
    }

    let meanings = group_by_part_of_speech(cambridge)
        .into_iter()
        .map(|(pos, definitions)| {
            let matching = english
                .meanings
                .iter()
                .find(|m| m.part_of_speech.to_lowercase() == pos);
            let examples = cambridge
                .examples_by_pos
                .get(&pos)
                .map(|examples| examples.iter().take(MAX_EXAMPLES).cloned().collect())
                .unwrap_or_default();

            MergedMeaning {
                definitions,
                examples,
                synonyms: matching
                    .map(|m| m.synonyms.iter().take(MAX_RELATED_WORDS).cloned().collect())
                    .unwrap_or_default(),
                antonyms: matching
                    .map(|m| m.antonyms.iter().take(MAX_RELATED_WORDS).cloned().collect())
                    .unwrap_or_default(),
                part_of_speech: pos,
            }
        })
        .collect();

    MergedEntry {
        word: word.to_string(),
        phonetic: english.phonetic.clone(),
        meanings,
    }
}

/// Group site definitions by lowercased part of speech, keeping the order
/// in which each part of speech first appears and at most
/// [`MAX_DEFINITIONS`] definitions per group.
fn group_by_part_of_speech(cambridge: &CambridgeRecord) -> Vec<(String, Vec<Definition>)> {
    let mut groups: Vec<(String, Vec<Definition>)> = Vec::new();

    for def in &cambridge.definitions {
        let pos = def.part_of_speech.to_lowercase();
        let index = match groups.iter().position(|(key, _)| *key == pos) {
            Some(index) => index,
            None => {
                groups.push((pos, Vec::new()));
                groups.len() - 1
            }
        };
        let definitions = &mut groups[index].1;
        if definitions.len() < MAX_DEFINITIONS {
            definitions.push(Definition::new(def.definition.clone()));
        }
    }

    groups
}
