//! Context rules for ambiguous punctuation
//!
//! Each rule looks at a mark in its surrounding text and decides whether it
//! is lexical (stays inside the token) or a boundary (stands alone). The
//! normalizer and the segmenter share these rules so both stages make the
//! same decision for the same position.
//!
//! Unless noted otherwise, every rule returns `false` at the first or last
//! position of the text.

use crate::character::{in_script_block, is_letter, is_numeral, APOSTROPHE_LETTER};
use crate::tables::CompoundPatterns;
use crate::window::CharWindow;

/// Maximum number of colon-separated groups in a clock time
pub const MAX_TIME_GROUPS: usize = 3;

/// Maximum digits per clock-time group
pub const MAX_TIME_GROUP_DIGITS: usize = 2;

/// Period after a letter that continues into more Assamese text
///
/// Holds when the previous character is a letter and the period either ends
/// the text, is directly followed by a letter, or is followed by one
/// whitespace character and then a letter. Unlike the other rules this one
/// is `true` at the last position.
pub fn is_abbreviation_period(window: &CharWindow, index: usize) -> bool {
    if index >= window.len() || !window.prev_char(index).is_some_and(is_letter) {
        return false;
    }

    match window.next_char(index) {
        None => true,
        Some(next) if next.is_whitespace() => window.next_next_char(index).is_some_and(is_letter),
        Some(next) => is_letter(next),
    }
}

fn between_numerals(window: &CharWindow, index: usize) -> bool {
    if window.is_at_edge(index) {
        return false;
    }
    matches!(
        window.context_triple(index),
        (Some(prev), _, Some(next)) if is_numeral(prev) && is_numeral(next)
    )
}

/// Period with a numeral on both sides
pub fn is_decimal_period(window: &CharWindow, index: usize) -> bool {
    between_numerals(window, index)
}

/// Colon inside a clock time such as `৯:৩০` or `১০:৩০:১৫`
///
/// The span is widened left over numerals and right over numerals and
/// colons, then split on colons. At most three groups of one or two
/// numerals are accepted.
pub fn is_time_colon(window: &CharWindow, index: usize) -> bool {
    if !between_numerals(window, index) {
        return false;
    }

    let span = window.time_span(index);
    let mut groups = 0;
    for group in window.as_chars()[span].split(|&c| c == ':') {
        groups += 1;
        if groups > MAX_TIME_GROUPS
            || group.is_empty()
            || group.len() > MAX_TIME_GROUP_DIGITS
            || !group.iter().copied().all(is_numeral)
        {
            return false;
        }
    }
    true
}

/// Apostrophe inside a word
///
/// Holds after `অ`, or when both neighbours are in the Bengali-Assamese
/// block.
pub fn is_word_apostrophe(window: &CharWindow, index: usize) -> bool {
    if window.is_at_edge(index) {
        return false;
    }
    match window.context_triple(index) {
        (Some(APOSTROPHE_LETTER), _, _) => true,
        (Some(prev), _, Some(next)) => in_script_block(prev) && in_script_block(next),
        _ => false,
    }
}

/// Hyphen joining two parts of a compound word
///
/// Holds when both neighbours are letters or diacritics, or when the words
/// around the hyphen match an entry in `patterns`. Only consulted when the
/// pipeline has compound joining switched on.
pub fn is_compound_hyphen(window: &CharWindow, index: usize, patterns: &CompoundPatterns) -> bool {
    if window.is_at_edge(index) {
        return false;
    }

    if let (Some(prev), _, Some(next)) = window.context_triple(index) {
        if is_letter(prev) && is_letter(next) {
            return true;
        }
    }

    // Pattern lookup needs at least two characters on each side
    if index < 2 || index + 2 >= window.len() || patterns.is_empty() {
        return false;
    }

    // Only the words next to the hyphen can match, so compare a window no
    // wider than the longest pattern word on each side.
    let before_end = window.run_start(index, char::is_whitespace);
    let after_start = window.run_end(index + 1, char::is_whitespace);
    let before = window.slice(before_end.saturating_sub(patterns.longest_first())..before_end);
    let after = window.slice(after_start..after_start + patterns.longest_second());
    patterns.matches(&before, &after)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, mark: char) -> (CharWindow, usize) {
        let window = CharWindow::new(text);
        let index = window
            .as_chars()
            .iter()
            .position(|&c| c == mark)
            .expect("mark present");
        (window, index)
    }

    #[test]
    fn test_abbreviation_period() {
        let cases = [
            ("ড.খ", true),
            ("ড. খ", true),
            ("ড.", true),
            ("ড.  খ", false),
            ("ড. ", false),
            ("ড.১", false),
            ("১.খ", false),
            (".খ", false),
            ("a.b", false),
        ];
        for (text, expected) in cases {
            let (window, index) = at(text, '.');
            assert_eq!(
                is_abbreviation_period(&window, index),
                expected,
                "Failed for text: '{text}'"
            );
        }
    }

    #[test]
    fn test_decimal_period() {
        let cases = [
            ("৩.১৪", true),
            ("১২.৫", true),
            ("৩.", false),
            (".৩", false),
            ("ক.৩", false),
            ("৩. ১", false),
        ];
        for (text, expected) in cases {
            let (window, index) = at(text, '.');
            assert_eq!(is_decimal_period(&window, index), expected, "Failed for text: '{text}'");
        }
    }

    #[test]
    fn test_time_colon() {
        let cases = [
            ("৯:৩০", true),
            ("৯:৩০:১৫", true),
            ("১০:৩০ বজাত", true),
            ("১২৩:৪৫", false),
            ("১:২:৩:৪", false),
            ("১:২৩৪", false),
            ("১:২:", false),
            ("ক:১", false),
            (":১", false),
            ("১:", false),
        ];
        for (text, expected) in cases {
            let (window, index) = at(text, ':');
            assert_eq!(is_time_colon(&window, index), expected, "Failed for text: '{text}'");
        }
    }

    #[test]
    fn test_time_colon_later_groups() {
        // Left expansion stops at a colon, so a trailing run can still qualify
        let window = CharWindow::new("১:২:৩:৪");
        assert!(!is_time_colon(&window, 1));
        assert!(is_time_colon(&window, 3));
        assert!(is_time_colon(&window, 5));
    }

    #[test]
    fn test_word_apostrophe() {
        let cases = [
            ("অ'ক", true),
            ("অ' ", true),
            ("ক'খ", true),
            ("১'২", true),
            ("ক' খ", false),
            ("a'b", false),
            ("'ক", false),
            ("ক'", false),
            ("অ'", false),
        ];
        for (text, expected) in cases {
            let (window, index) = at(text, '\'');
            assert_eq!(is_word_apostrophe(&window, index), expected, "Failed for text: '{text}'");
        }
    }

    #[test]
    fn test_compound_hyphen_neighbours() {
        let patterns = CompoundPatterns::builtin();
        let (window, index) = at("ঘৰ-দুৱাৰ", '-');
        assert!(is_compound_hyphen(&window, index, &patterns));

        let (window, index) = at("১-২", '-');
        assert!(!is_compound_hyphen(&window, index, &patterns));

        let (window, index) = at("-ক", '-');
        assert!(!is_compound_hyphen(&window, index, &patterns));
    }

    #[test]
    fn test_compound_hyphen_patterns() {
        let patterns = CompoundPatterns::builtin();
        let (window, index) = at("উত্তৰ - পূৰ্ব", '-');
        assert!(is_compound_hyphen(&window, index, &patterns));

        let (window, index) = at("পূৰ্ব - পশ্চিম", '-');
        assert!(is_compound_hyphen(&window, index, &patterns));

        let (window, index) = at("ঘৰ - দুৱাৰ", '-');
        assert!(!is_compound_hyphen(&window, index, &patterns));
        assert!(!is_compound_hyphen(&window, index, &CompoundPatterns::empty()));
    }

    #[test]
    fn test_compound_hyphen_looks_only_at_adjacent_words() {
        let patterns = CompoundPatterns::builtin();

        // Long context on both sides does not hide a match
        let text = format!("{}দক্ষিণ \t - পূৰ্ব{}", "ক খ ".repeat(500), " গ".repeat(500));
        let (window, index) = at(&text, '-');
        assert!(is_compound_hyphen(&window, index, &patterns));

        // The pattern words must touch the hyphen, whitespace aside
        let (window, index) = at("উত্তৰ দিশ - পূৰ্ব", '-');
        assert!(!is_compound_hyphen(&window, index, &patterns));
        let (window, index) = at("উত্তৰ - দিশ পূৰ্ব", '-');
        assert!(!is_compound_hyphen(&window, index, &patterns));

        // Longer words ending or starting with a pattern word still match
        let (window, index) = at("অসমৰ উত্তৰ - পূৰ্বাঞ্চল", '-');
        assert!(is_compound_hyphen(&window, index, &patterns));
    }
}
