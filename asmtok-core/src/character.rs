//! Character classification for Assamese tokenization
//!
//! All predicates here are pure functions of a single code point. Anything
//! outside the ranges below falls through to [`CharClass::Other`]; there is
//! no error path.

use std::ops::RangeInclusive;

/// Assamese numerals `০`..=`৯`
pub const NUMERALS: RangeInclusive<char> = '\u{09E6}'..='\u{09EF}';

/// The whole Bengali-Assamese Unicode block
pub const SCRIPT_BLOCK: RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// Letters and diacritics before the numeral range
const LETTERS_LOW: RangeInclusive<char> = '\u{0980}'..='\u{09E5}';

/// Letters and signs after the numeral range (ৰ, ৱ, currency marks, ...)
const LETTERS_HIGH: RangeInclusive<char> = '\u{09F0}'..='\u{09FF}';

/// Danda, the sentence-stop mark
pub const DANDA: char = '।';

/// Letter that keeps a following apostrophe inside the word
pub const APOSTROPHE_LETTER: char = 'অ';

/// Classification of characters for tokenization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Assamese letter or diacritic
    ScriptLetter,
    /// Assamese numeral
    ScriptNumeral,
    /// Any Unicode whitespace
    Whitespace,
    /// Straight double quote
    Quote,
    /// Full stop
    Period,
    /// Colon
    Colon,
    /// Straight apostrophe
    Apostrophe,
    /// Hyphen-minus
    Hyphen,
    /// Punctuation that always stands alone
    FixedPunctuation,
    /// Everything else
    Other,
}

/// Classify a single character
pub fn classify(ch: char) -> CharClass {
    match ch {
        '"' => CharClass::Quote,
        '.' => CharClass::Period,
        ':' => CharClass::Colon,
        '\'' => CharClass::Apostrophe,
        '-' => CharClass::Hyphen,
        ',' | '!' | '?' | DANDA => CharClass::FixedPunctuation,
        c if c.is_whitespace() => CharClass::Whitespace,
        c if is_numeral(c) => CharClass::ScriptNumeral,
        c if is_letter(c) => CharClass::ScriptLetter,
        _ => CharClass::Other,
    }
}

/// Check if a character is an Assamese numeral
#[inline]
pub fn is_numeral(ch: char) -> bool {
    NUMERALS.contains(&ch)
}

/// Check if a character is an Assamese letter or diacritic (numerals excluded)
#[inline]
pub fn is_letter(ch: char) -> bool {
    LETTERS_LOW.contains(&ch) || LETTERS_HIGH.contains(&ch)
}

/// Letter-or-numeral union
#[inline]
pub fn is_script_char(ch: char) -> bool {
    is_letter(ch) || is_numeral(ch)
}

/// Check if a character falls anywhere in the Bengali-Assamese block
#[inline]
pub fn in_script_block(ch: char) -> bool {
    SCRIPT_BLOCK.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeral_range() {
        for ch in "০১২৩৪৫৬৭৮৯".chars() {
            assert!(is_numeral(ch), "{ch} should be a numeral");
            assert!(!is_letter(ch), "{ch} should not be a letter");
            assert!(is_script_char(ch));
        }
        assert!(!is_numeral('5'));
        assert!(!is_numeral('\u{09E5}'));
        assert!(!is_numeral('\u{09F0}'));
    }

    #[test]
    fn test_letter_ranges() {
        for ch in "অআকখৰৱংঃািী্".chars() {
            assert!(is_letter(ch), "{ch:?} should be a letter");
        }
        assert!(is_letter('\u{0980}'));
        assert!(is_letter('\u{09FF}'));
        assert!(!is_letter('a'));
        assert!(!is_letter(DANDA));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('ক'), CharClass::ScriptLetter);
        assert_eq!(classify('৩'), CharClass::ScriptNumeral);
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\u{00A0}'), CharClass::Whitespace);
        assert_eq!(classify('"'), CharClass::Quote);
        assert_eq!(classify('.'), CharClass::Period);
        assert_eq!(classify(':'), CharClass::Colon);
        assert_eq!(classify('\''), CharClass::Apostrophe);
        assert_eq!(classify('-'), CharClass::Hyphen);
        assert_eq!(classify('।'), CharClass::FixedPunctuation);
        assert_eq!(classify('?'), CharClass::FixedPunctuation);
        assert_eq!(classify('a'), CharClass::Other);
        assert_eq!(classify(';'), CharClass::Other);
    }

    #[test]
    fn test_unassigned_code_points_are_other() {
        // First code point past the block
        assert_eq!(classify('\u{0A00}'), CharClass::Other);
        assert_eq!(classify('\u{10FFFF}'), CharClass::Other);
        assert!(!in_script_block('\u{0A00}'));
    }
}
