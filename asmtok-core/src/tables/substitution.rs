//! Ordered one-pass character substitution
//!
//! Canonicalizes typographic quotes, the visarga, the Bengali ra homoglyph
//! and ASCII digits before any context rule runs. Rules are tried in order
//! at each position and the first match wins. Output is never rescanned, so
//! a replacement can never feed another rule.

/// Ya with nukta as a single code point
pub const YA_NUKTA: &str = "\u{09DF}";

/// Ya followed by a combining nukta
pub const YA_NUKTA_DECOMPOSED: &str = "\u{09AF}\u{09BC}";

const QUOTES: [(&str, &str); 4] = [
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("\u{201C}", "\""),
    ("\u{201D}", "\""),
];

/// Visarga is read as a colon
const VISARGA: (&str, &str) = ("\u{0983}", ":");

/// Bengali ra to Assamese ra
const RA: (&str, &str) = ("\u{09B0}", "\u{09F0}");

/// Inert: maps the composed ya-nukta onto itself
///
/// The rule this stands in for composed a decomposed ya + nukta
/// (U+09AF U+09BC) into U+09DF. The standard table leaves both forms
/// untouched so existing output does not shift; the composing rule is
/// available through [`SubstitutionTable::with_ya_nukta_composition`].
const YA_NUKTA_INERT: (&str, &str) = (YA_NUKTA, YA_NUKTA);

const YA_NUKTA_COMPOSE: (&str, &str) = (YA_NUKTA_DECOMPOSED, YA_NUKTA);

const DIGITS: [(&str, &str); 10] = [
    ("0", "০"),
    ("1", "১"),
    ("2", "২"),
    ("3", "৩"),
    ("4", "৪"),
    ("5", "৫"),
    ("6", "৬"),
    ("7", "৭"),
    ("8", "৮"),
    ("9", "৯"),
];

/// Ordered `(pattern, replacement)` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    rules: Vec<(&'static str, &'static str)>,
}

impl SubstitutionTable {
    /// Standard table with the inert ya-nukta entry
    pub fn standard() -> Self {
        Self::build(YA_NUKTA_INERT)
    }

    /// Standard table that also composes a decomposed ya-nukta
    pub fn with_ya_nukta_composition() -> Self {
        Self::build(YA_NUKTA_COMPOSE)
    }

    fn build(ya_nukta: (&'static str, &'static str)) -> Self {
        let mut rules = Vec::with_capacity(QUOTES.len() + DIGITS.len() + 3);
        rules.extend(QUOTES);
        rules.push(VISARGA);
        rules.push(RA);
        rules.push(ya_nukta);
        rules.extend(DIGITS);
        debug_assert!(rules.iter().all(|(pattern, _)| !pattern.is_empty()));
        Self { rules }
    }

    /// Rules in application order
    pub fn rules(&self) -> &[(&'static str, &'static str)] {
        &self.rules
    }

    /// Apply the table in a single left-to-right pass
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(ch) = rest.chars().next() {
            match self.rules.iter().find(|(pattern, _)| rest.starts_with(pattern)) {
                Some((pattern, replacement)) => {
                    out.push_str(replacement);
                    rest = &rest[pattern.len()..];
                }
                None => {
                    out.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        out
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::NUMERALS;

    #[test]
    fn test_quotes_are_straightened() {
        let table = SubstitutionTable::standard();
        assert_eq!(table.apply("‘ক’ “খ”"), "'ক' \"খ\"");
    }

    #[test]
    fn test_visarga_becomes_colon() {
        let table = SubstitutionTable::standard();
        assert_eq!(table.apply("দুঃখ"), "দু:খ");
    }

    #[test]
    fn test_bengali_ra_becomes_assamese_ra() {
        let table = SubstitutionTable::standard();
        assert_eq!(table.apply("রাম"), "ৰাম");
        // Already Assamese: untouched
        assert_eq!(table.apply("ৰাম"), "ৰাম");
    }

    #[test]
    fn test_digits_become_numerals() {
        let table = SubstitutionTable::standard();
        assert_eq!(table.apply("2024 সন"), "২০২৪ সন");
    }

    #[test]
    fn test_ya_nukta_is_inert_by_default() {
        let table = SubstitutionTable::standard();
        assert_eq!(table.apply(YA_NUKTA), YA_NUKTA);
        assert_eq!(table.apply(YA_NUKTA_DECOMPOSED), YA_NUKTA_DECOMPOSED);
    }

    #[test]
    fn test_ya_nukta_composition_when_enabled() {
        let table = SubstitutionTable::with_ya_nukta_composition();
        let decomposed = format!("সম{YA_NUKTA_DECOMPOSED}");
        assert_eq!(table.apply(&decomposed), format!("সম{YA_NUKTA}"));
        assert_eq!(table.apply(YA_NUKTA), YA_NUKTA);
    }

    #[test]
    fn test_single_pass_is_stable() {
        let table = SubstitutionTable::standard();
        let once = table.apply("“ৰ১ঃ” 7 র");
        assert_eq!(table.apply(&once), once);
    }

    #[test]
    fn test_digit_rules_cover_numeral_range() {
        let targets: Vec<char> = DIGITS
            .iter()
            .flat_map(|(_, numeral)| numeral.chars())
            .collect();
        let numerals: Vec<char> = NUMERALS.collect();
        assert_eq!(targets, numerals);
        assert!(DIGITS
            .iter()
            .zip('0'..='9')
            .all(|((digit, _), ascii)| digit.chars().eq([ascii])));
    }

    #[test]
    fn test_unrelated_text_passes_through() {
        let table = SubstitutionTable::standard();
        assert_eq!(table.apply("hello, world"), "hello, world");
        assert_eq!(table.apply(""), "");
    }

    #[test]
    fn test_rule_order() {
        let table = SubstitutionTable::standard();
        let patterns: Vec<&str> = table.rules().iter().map(|(p, _)| *p).collect();
        assert_eq!(patterns[..4], ["\u{2018}", "\u{2019}", "\u{201C}", "\u{201D}"]);
        assert_eq!(patterns[4], "\u{0983}");
        assert_eq!(patterns.last(), Some(&"9"));
    }
}
