//! Text extraction and cleanup shared by the HTML parsers.

use scraper::ElementRef;

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text fragments of `element` joined by spaces, whitespace collapsed.
pub fn spaced_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text fragments of `element`, each trimmed, concatenated without separator.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Normalize a scraped definition.
///
/// Collapses whitespace, drops every character that is not a word
/// character, whitespace, or one of `; , : . -`, then puts a space after
/// each colon. Nothing is re-collapsed afterwards, so `"a: b"` becomes
/// `"a:  b"` and a stripped `"( "` leaves its spaces behind.
pub fn clean_definition(text: &str) -> String {
    collapse_whitespace(text)
        .chars()
        .filter(|&c| is_definition_char(c))
        .collect::<String>()
        .replace(':', ": ")
}

fn is_definition_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || matches!(c, ';' | ',' | ':' | '.' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn collapse_whitespace_normalizes_runs() {
        assert_eq!(collapse_whitespace("  to \n move\t\tfast  "), "to move fast");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn clean_strips_disallowed_punctuation() {
        assert_eq!(clean_definition("run (quickly)!"), "run quickly");
    }

    #[test]
    fn clean_spaces_after_colon_without_recollapsing() {
        assert_eq!(
            clean_definition("to express: something"),
            "to express:  something"
        );
        assert_eq!(clean_definition("note:this"), "note: this");
    }

    #[test]
    fn clean_keeps_allowed_punctuation() {
        assert_eq!(
            clean_definition("well-known; used, often. yes"),
            "well-known; used, often. yes"
        );
    }

    #[test]
    fn clean_removes_quotes_and_brackets() {
        assert_eq!(clean_definition("\"say\" [sth] 'hi'?"), "say sth hi");
    }

    #[test]
    fn clean_leaves_inner_gap_where_symbol_was() {
        assert_eq!(clean_definition("a ( b"), "a  b");
    }

    #[test]
    fn clean_keeps_unicode_letters_and_underscore() {
        assert_eq!(clean_definition("café_au_lait €5"), "café_au_lait 5");
    }

    #[test]
    fn clean_can_empty_a_definition() {
        assert_eq!(clean_definition("(!?)"), "");
    }

    #[test]
    fn element_text_helpers() {
        let html = Html::parse_fragment(
            r#"<div class="d"> to <a href="/x">move</a>
                fast </div>"#,
        );
        let selector = Selector::parse("div.d").expect("selector");
        let element = html.select(&selector).next().expect("element");
        assert_eq!(spaced_text(element), "to move fast");
        assert_eq!(stripped_text(element), "tomovefast");
    }
}
