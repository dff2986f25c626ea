// src/lexicon.rs
use crate::core::collator::{Collator, SortKey};
use std::cmp::Ordering;

/// A word list kept in collation order, without duplicates.
///
/// Two words are duplicates when the collator finds them equal, so a word
/// spelled with a split vowel sign is the same entry as its composed form.
/// The first spelling inserted is the one kept.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    collator: Collator,
    words: Vec<String>,
}

impl Lexicon {
    pub fn new(collator: Collator) -> Self {
        Self { collator, words: Vec::new() }
    }

    /// Builds a lexicon from words in any order.
    pub fn from_words<I, S>(collator: Collator, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        collator.sort(&mut words);
        words.dedup_by(|later, earlier| {
            collator.compare(later.as_str(), earlier.as_str()) == Ordering::Equal
        });
        Self { collator, words }
    }

    pub fn collator(&self) -> Collator {
        self.collator
    }

    fn search(&self, word: &str) -> Result<usize, usize> {
        self.words
            .binary_search_by(|probe| self.collator.compare(probe, word))
    }

    /// Inserts `word` at its sorted position. Returns `false` if an equal
    /// word is already present.
    /// O(log n) comparisons plus the shift of the tail.
    pub fn insert(&mut self, word: &str) -> bool {
        match self.search(word) {
            Ok(_) => false,
            Err(pos) => {
                self.words.insert(pos, word.to_string());
                true
            }
        }
    }

    /// Removes the entry equal to `word`, returning its stored spelling.
    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.search(word).ok().map(|pos| self.words.remove(pos))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_ok()
    }

    /// Words whose leading letters are the letters of `prefix`.
    ///
    /// Matching is by letter, not by code point: "க" does not match "கு",
    /// since கு is a different letter. Those words form one contiguous run
    /// starting where `prefix` itself would sort.
    pub fn with_prefix(&self, prefix: &str) -> &[String] {
        let key = self.collator.sort_key(prefix);
        let start = self
            .words
            .partition_point(|w| self.collator.compare(w, prefix) == Ordering::Less);
        let len = self.words[start..]
            .iter()
            .take_while(|w| self.collator.sort_key(w).starts_with(&key))
            .count();
        &self.words[start..start + len]
    }

    pub fn sort_key(&self, word: &str) -> SortKey {
        self.collator.sort_key(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForeignPolicy;

    fn sample() -> Lexicon {
        Lexicon::from_words(
            Collator::default(),
            ["மடம்", "மட்டம்", "கு", "மட்", "கடல்", "க", "மடம்"],
        )
    }

    #[test]
    fn from_words_sorts_and_dedups() {
        let lexicon = sample();
        assert_eq!(lexicon.words(), ["க", "கடல்", "கு", "மட்", "மட்டம்", "மடம்"]);
    }

    #[test]
    fn insert_keeps_order() {
        let mut lexicon = sample();
        assert!(lexicon.insert("படம்"));
        assert!(!lexicon.insert("படம்"));
        assert_eq!(lexicon.words()[3], "படம்");
        assert_eq!(lexicon.len(), 7);
    }

    #[test]
    fn equivalent_spellings_are_one_entry() {
        let mut lexicon = Lexicon::new(Collator::default());
        assert!(lexicon.insert("கொடி"));
        assert!(!lexicon.insert("க\u{0BC6}\u{0BBE}டி"));
        assert!(lexicon.contains("க\u{0BC6}\u{0BBE}டி"));
        assert_eq!(lexicon.remove("க\u{0BC6}\u{0BBE}டி").as_deref(), Some("கொடி"));
        assert!(lexicon.is_empty());
    }

    #[test]
    fn remove_missing_is_none() {
        let mut lexicon = sample();
        assert_eq!(lexicon.remove("தடி"), None);
        assert_eq!(lexicon.len(), 6);
    }

    #[test]
    fn prefix_matches_whole_letters() {
        let lexicon = sample();
        assert_eq!(lexicon.with_prefix("க"), ["க", "கடல்"]);
        assert_eq!(lexicon.with_prefix("மட்"), ["மட்", "மட்டம்"]);
        assert_eq!(lexicon.with_prefix("ம"), ["மட்", "மட்டம்", "மடம்"]);
        assert!(lexicon.with_prefix("ப").is_empty());
        assert_eq!(lexicon.with_prefix("").len(), lexicon.len());
    }

    #[test]
    fn policy_affects_foreign_placement() {
        let first = Lexicon::from_words(Collator::new(ForeignPolicy::First), ["அ", "1"]);
        let last = Lexicon::from_words(Collator::new(ForeignPolicy::Last), ["அ", "1"]);
        assert_eq!(first.words(), ["1", "அ"]);
        assert_eq!(last.words(), ["அ", "1"]);
    }
}
