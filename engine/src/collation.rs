//! FILENAME: engine/src/collation.rs
//! PURPOSE: Locale-insensitive string comparison for sorting and dedup.
//! CONTEXT: Name sorting and filter-option ordering both use a base-strength
//! comparison: differences in case, width, accents/voicing marks, and kana
//! script are ignored. The `Collation` trait is the injection seam; the
//! query engine never compares strings directly, so a platform collator can
//! be swapped in without touching the algorithms.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Comparison rules for facility names and filter-option values.
///
/// Implementations must provide a total order. `fold` returns the canonical
/// key two strings are compared by; `compare` must be consistent with it.
pub trait Collation {
    /// Compares two strings according to this collation's rules.
    fn compare(&self, left: &str, right: &str) -> Ordering;

    /// Returns the canonical fold of `text` used as the comparison key.
    fn fold(&self, text: &str) -> String;
}

/// Base-strength collation: compares NFKD-decomposed text with combining
/// marks stripped, lowercased, and katakana folded to hiragana.
///
/// That makes "カフェ", "かふぇ", and "ｶﾌｪ" compare equal, and likewise
/// "Cafe" and "CAFÉ". Voicing marks decompose to combining characters under
/// NFKD, so "は" and "ば" also meet at this strength.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStrengthCollation;

impl Collation for BaseStrengthCollation {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.fold(left).cmp(&self.fold(right))
    }

    fn fold(&self, text: &str) -> String {
        text.nfkd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .map(katakana_to_hiragana)
            .collect()
    }
}

/// Shifts a katakana letter down to its hiragana counterpart.
/// The two scripts are parallel blocks 0x60 code points apart.
fn katakana_to_hiragana(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' => {
            char::from_u32(c as u32 - 0x60).unwrap_or(c)
        }
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn case_is_ignored() {
        let collation = BaseStrengthCollation;
        assert_eq!(collation.compare("Spawn", "sPAWN"), Ordering::Equal);
    }

    #[test]
    fn accents_are_ignored() {
        let collation = BaseStrengthCollation;
        assert_eq!(collation.compare("Cafe", "CAFÉ"), Ordering::Equal);
    }

    #[test]
    fn kana_script_and_width_are_ignored() {
        let collation = BaseStrengthCollation;
        assert_eq!(collation.compare("カフェ", "かふぇ"), Ordering::Equal);
        assert_eq!(collation.compare("ｶﾌｪ", "かふぇ"), Ordering::Equal);
        assert_eq!(collation.compare("Ａｂｃ", "abc"), Ordering::Equal);
    }

    #[test]
    fn voicing_marks_are_ignored() {
        let collation = BaseStrengthCollation;
        assert_eq!(collation.compare("はら", "ばら"), Ordering::Equal);
    }

    #[test]
    fn distinct_strings_still_order() {
        let collation = BaseStrengthCollation;
        assert_eq!(collation.compare("abc", "abd"), Ordering::Less);
        assert_eq!(collation.compare("い", "あ"), Ordering::Greater);

        let mut names = vec!["さくら", "カエデ", "あおい"];
        names.sort_by(|a, b| collation.compare(a, b));
        assert_eq!(names, vec!["あおい", "カエデ", "さくら"]);
    }

    #[test]
    fn fold_is_stable_under_refolding() {
        let collation = BaseStrengthCollation;
        let once = collation.fold("ガｰデンCafé");
        assert_eq!(collation.fold(&once), once);
    }
}
