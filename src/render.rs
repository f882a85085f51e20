//! Plain-text rendering of a lookup for the terminal.

use std::collections::BTreeSet;
use std::fmt::Write;

use lexmerge_sources::types::{MAX_BANGLA_MEANINGS, MAX_DEFINITIONS, MAX_EXAMPLES, MAX_RELATED_WORDS};
use lexmerge_sources::{Meaning, WordLookup};

/// Column at which long lines are wrapped.
const WRAP_WIDTH: usize = 80;

/// Shown when no source produced anything.
pub const NOT_FOUND: &str = "No definitions found for this word.";

/// Render `lookup` as a human-readable text block.
pub fn render_text(lookup: &WordLookup) -> String {
    if lookup.is_empty() {
        return format!("{NOT_FOUND}\n");
    }

    let entry = &lookup.entry;
    let bangla = &lookup.bangla;
    let mut out = String::new();

    let parts: BTreeSet<String> = entry
        .meanings
        .iter()
        .filter(|m| !m.part_of_speech.is_empty())
        .map(|m| capitalize(&m.part_of_speech))
        .collect();
    out.push_str(&capitalize(&entry.word));
    if !parts.is_empty() {
        let parts: Vec<String> = parts.into_iter().collect();
        let _ = write!(out, " ({})", parts.join(", "));
    }
    out.push('\n');
    out.push_str(&"━".repeat(60));
    out.push_str("\n\n");

    let mut pronunciation = false;
    if !entry.phonetic.is_empty() {
        let _ = writeln!(out, "English Pronunciation: {}", entry.phonetic);
        pronunciation = true;
    }
    if !bangla.pronunciation.is_empty() {
        let _ = writeln!(out, "Bangla Pronunciation: {}", bangla.pronunciation);
        pronunciation = true;
    }
    if pronunciation {
        out.push('\n');
    }

    if bangla.meanings.is_empty() {
        out.push_str("Bangla Meanings: Not found\n\n");
    } else {
        out.push_str("Bangla Meanings:\n");
        for (i, meaning) in bangla.meanings.iter().take(MAX_BANGLA_MEANINGS).enumerate() {
            out.push_str(&wrap(meaning, &format!("  {}. ", i + 1), "    "));
        }
        out.push('\n');
    }

    out.push_str("English Definitions:\n");
    for meaning in &entry.meanings {
        render_meaning(&mut out, meaning);
    }
    out
}

fn render_meaning(out: &mut String, meaning: &Meaning) {
    if !meaning.part_of_speech.is_empty() {
        let _ = writeln!(out, "  {}", capitalize(&meaning.part_of_speech));
    }

    for (i, def) in meaning.definitions.iter().take(MAX_DEFINITIONS).enumerate() {
        out.push_str(&wrap(&def.definition, &format!("  {}. ", i + 1), "      "));
        if !def.example.is_empty() {
            out.push_str(&wrap(&def.example, "   • ", "     "));
        }
    }

    let examples: Vec<&String> = meaning.examples.iter().take(MAX_EXAMPLES).collect();
    if !examples.is_empty() {
        out.push_str("Examples:\n");
        for example in examples {
            out.push_str(&wrap(example, "   • ", "     "));
        }
        out.push('\n');
    }

    let synonyms: Vec<&str> = meaning
        .synonyms
        .iter()
        .take(MAX_RELATED_WORDS)
        .map(String::as_str)
        .collect();
    if !synonyms.is_empty() {
        let _ = writeln!(out, "Synonyms: {}", synonyms.join(", "));
    }

    let antonyms: Vec<&str> = meaning
        .antonyms
        .iter()
        .take(MAX_RELATED_WORDS)
        .map(String::as_str)
        .collect();
    if !antonyms.is_empty() {
        let _ = writeln!(out, "Antonyms: {}", antonyms.join(", "));
    }

    out.push('\n');
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => {
            let mut result = c.to_uppercase().to_string();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Fill `text` to [`WRAP_WIDTH`] columns, newline-terminated.
///
/// `first` prefixes the first line and `rest` every following one. Words
/// longer than a line are split.
fn wrap(text: &str, first: &str, rest: &str) -> String {
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(first)
        .subsequent_indent(rest);
    let mut wrapped = textwrap::fill(text, options);
    wrapped.push('\n');
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexmerge_sources::{BanglaRecord, Definition, MergedEntry};

    fn sample() -> WordLookup {
        WordLookup {
            entry: MergedEntry {
                word: "run".into(),
                phonetic: "/ɹʌn/".into(),
                meanings: vec![
                    Meaning {
                        part_of_speech: "verb".into(),
                        definitions: vec![Definition {
                            definition: "to move fast".into(),
                            example: "He ran home.".into(),
                        }],
                        synonyms: vec!["sprint".into(), "dash".into()],
                        antonyms: vec![],
                        examples: vec!["He ran quickly.".into()],
                    },
                    Meaning {
                        part_of_speech: "noun".into(),
                        definitions: vec![Definition::new("an act of running")],
                        ..Default::default()
                    },
                ],
            },
            bangla: BanglaRecord {
                meanings: vec!["দৌড়ানো".into()],
                pronunciation: "রান".into(),
            },
        }
    }

    #[test]
    fn empty_lookup_renders_not_found() {
        let lookup = WordLookup {
            entry: MergedEntry::empty("zzz"),
            bangla: BanglaRecord::default(),
        };
        assert_eq!(render_text(&lookup), format!("{NOT_FOUND}\n"));
    }

    #[test]
    fn title_lists_sorted_capitalized_parts_of_speech() {
        let text = render_text(&sample());
        assert!(text.starts_with("Run (Noun, Verb)\n"));
    }

    #[test]
    fn renders_pronunciations_and_bangla() {
        let text = render_text(&sample());
        assert!(text.contains("English Pronunciation: /ɹʌn/\n"));
        assert!(text.contains("Bangla Pronunciation: রান\n"));
        assert!(text.contains("Bangla Meanings:\n  1. দৌড়ানো\n"));
    }

    #[test]
    fn renders_definitions_examples_and_related_words() {
        let text = render_text(&sample());
        assert!(text.contains("  Verb\n  1. to move fast\n   • He ran home.\n"));
        assert!(text.contains("Examples:\n   • He ran quickly.\n"));
        assert!(text.contains("Synonyms: sprint, dash\n"));
        assert!(!text.contains("Antonyms:"));
        assert!(text.contains("  Noun\n  1. an act of running\n"));
    }

    #[test]
    fn missing_bangla_meanings_are_reported() {
        let mut lookup = sample();
        lookup.bangla = BanglaRecord::default();
        let text = render_text(&lookup);
        assert!(text.contains("Bangla Meanings: Not found\n"));
        assert!(!text.contains("Bangla Pronunciation"));
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("phrasal VERB"), "Phrasal verb");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn wrap_breaks_long_text() {
        let text = "word ".repeat(40);
        let wrapped = wrap(&text, "  1. ", "      ");
        let lines: Vec<&str> = wrapped.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= WRAP_WIDTH));
        assert!(lines[0].starts_with("  1. word"));
        assert!(lines[1].starts_with("      word"));
    }

    #[test]
    fn wrap_splits_overlong_word_within_width() {
        let long = "x".repeat(100);
        let wrapped = wrap(&long, "  1. ", "      ");
        let lines: Vec<&str> = wrapped.lines().collect();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                line.chars().count() <= WRAP_WIDTH,
                "line of {} columns exceeds {WRAP_WIDTH}",
                line.chars().count()
            );
        }
        let rejoined: String = lines.iter().map(|l| l.trim_start_matches(['1', '.', ' '])).collect();
        assert_eq!(rejoined, long);
    }

    #[test]
    fn rendered_lines_stay_within_width() {
        let mut lookup = sample();
        lookup.entry.meanings[0].definitions[0].definition = "y".repeat(120);
        lookup.entry.meanings[0].examples = vec![format!("{} end", "z".repeat(90))];
        let text = render_text(&lookup);
        assert!(text.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
    }
}
