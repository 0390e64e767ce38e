//! Generic label text utilities.
//!
//! Street-type abbreviation and general label cleanup shared by every
//! agency's rules. Agency-specific removals live in
//! [`crate::agency::labels`] and run before these.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STREET_TYPES: Vec<(Regex, &'static str)> = [
        ("avenue", "Ave"),
        ("boulevard", "Blvd"),
        ("court", "Ct"),
        ("crescent", "Cres"),
        ("drive", "Dr"),
        ("highway", "Hwy"),
        ("parkway", "Pkwy"),
        ("place", "Pl"),
        ("road", "Rd"),
        ("street", "St"),
    ]
    .into_iter()
    .map(|(word, abbrev)| {
        let re = Regex::new(&format!(r"(?i)\b{word}\b")).unwrap();
        (re, abbrev)
    })
    .collect();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([,.;:)])").unwrap();
    static ref SPACE_AFTER_PAREN: Regex = Regex::new(r"\(\s+").unwrap();
    static ref EMPTY_PARENS: Regex = Regex::new(r"\(\s*\)").unwrap();
    static ref EDGE_SEPARATORS: Regex = Regex::new(r"^[\s\-/,&]+|[\s\-/,&]+$").unwrap();
}

/// Abbreviate street types ("Street" -> "St", "Avenue" -> "Ave", ...).
pub fn clean_street_types(label: &str) -> String {
    let mut label = label.to_string();
    for (re, abbrev) in STREET_TYPES.iter() {
        label = re.replace_all(&label, *abbrev).into_owned();
    }
    label
}

/// General label cleanup.
///
/// Collapses whitespace, drops empty parentheses, removes stray spaces
/// around punctuation, strips separators left dangling at either end and
/// capitalises words that are entirely lowercase.
///
/// ```
/// use up_express::text::clean_label;
///
/// assert_eq!(clean_label("  union   () "), "Union");
/// assert_eq!(clean_label("Weston GO/UP"), "Weston GO/UP");
/// assert_eq!(clean_label("- Pearson ,"), "Pearson");
/// ```
pub fn clean_label(label: &str) -> String {
    fixpoint(label, clean_label_once)
}

fn clean_label_once(label: &str) -> String {
    let mut label = WHITESPACE.replace_all(label, " ").into_owned();
    label = EMPTY_PARENS.replace_all(&label, "").into_owned();
    label = SPACE_BEFORE_PUNCT.replace_all(&label, "$1").into_owned();
    label = SPACE_AFTER_PAREN.replace_all(&label, "(").into_owned();
    label = WHITESPACE.replace_all(&label, " ").into_owned();
    label = EDGE_SEPARATORS.replace_all(&label, "").into_owned();
    label
        .split(' ')
        .map(capitalize_lowercase_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// "pearson" -> "Pearson"; words with any uppercase letter are left alone
/// so acronyms like "GO/UP" survive.
fn capitalize_lowercase_word(word: &str) -> String {
    if word.chars().any(char::is_uppercase) {
        return word.to_string();
    }
    let mut out = String::with_capacity(word.len());
    let mut done = false;
    for c in word.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Apply `pass` until the text stops changing.
///
/// Each pass only removes text or raises case, so this settles after a
/// handful of rounds; the bound guards against a pass that never settles.
pub(crate) fn fixpoint(input: &str, pass: impl Fn(&str) -> String) -> String {
    let max_passes = input.chars().count() + 2;
    let mut current = pass(input);
    for _ in 0..max_passes {
        let next = pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_types_abbreviated() {
        assert_eq!(clean_street_types("Bloor Street"), "Bloor St");
        assert_eq!(clean_street_types("Dundas STREET West"), "Dundas St West");
        assert_eq!(clean_street_types("Airport Road"), "Airport Rd");
        assert_eq!(clean_street_types("Weston Avenue"), "Weston Ave");
    }

    #[test]
    fn street_types_match_whole_words_only() {
        assert_eq!(clean_street_types("Streetsville"), "Streetsville");
        assert_eq!(clean_street_types("Broadway"), "Broadway");
    }

    #[test]
    fn label_whitespace_collapsed_and_trimmed() {
        assert_eq!(clean_label("  Pearson   Airport  "), "Pearson Airport");
        assert_eq!(clean_label("\tUnion\n"), "Union");
    }

    #[test]
    fn label_punctuation_tidied() {
        assert_eq!(clean_label("Union , Toronto"), "Union, Toronto");
        assert_eq!(clean_label("Pearson ( T1 )"), "Pearson (T1)");
        assert_eq!(clean_label("Bloor ()"), "Bloor");
    }

    #[test]
    fn label_dangling_separators_removed() {
        assert_eq!(clean_label("/ Weston -"), "Weston");
        assert_eq!(clean_label(" & Bloor"), "Bloor");
        assert_eq!(clean_label("---"), "");
    }

    #[test]
    fn label_capitalises_lowercase_words() {
        assert_eq!(clean_label("union"), "Union");
        assert_eq!(clean_label("pearson airport"), "Pearson Airport");
        assert_eq!(clean_label("GO/UP"), "GO/UP");
        assert_eq!(clean_label("McCowan"), "McCowan");
    }

    #[test]
    fn label_empty_stays_empty() {
        assert_eq!(clean_label(""), "");
        assert_eq!(clean_label("   "), "");
    }
}
