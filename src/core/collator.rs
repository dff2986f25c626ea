// src/core/collator.rs
use crate::config::{CollatorConfig, ForeignPolicy};
use crate::core::order::OrderTable;
use crate::core::script::BLOCK_START;
use crate::core::segmenter::segment;
use crate::core::types::{Letter, Word};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Collation weight of one letter, borrowing the letter's text.
///
/// Variant order is collation order: fallback letters placed before the
/// alphabet, ranked Tamil letters, fallback letters placed after it. Fallback
/// text compares bytewise, which for UTF-8 is code-point order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Rank<'a> {
    Before(&'a str),
    Native(u16),
    After(&'a str),
}

/// Owned collation weight of one letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weight {
    Before(String),
    Native(u16),
    After(String),
}

impl Rank<'_> {
    fn to_weight(self) -> Weight {
        match self {
            Rank::Before(s) => Weight::Before(s.to_string()),
            Rank::Native(r) => Weight::Native(r),
            Rank::After(s) => Weight::After(s.to_string()),
        }
    }
}

/// A word's weights, letter by letter. Comparing two keys gives the same
/// answer as comparing the words with the collator that built them.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortKey(Vec<Weight>);

impl SortKey {
    pub fn weights(&self) -> &[Weight] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &SortKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

/// Orders Tamil text in native alphabetical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collator {
    policy: ForeignPolicy,
}

impl Collator {
    pub const fn new(policy: ForeignPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &CollatorConfig) -> Self {
        Self::new(config.foreign)
    }

    pub fn policy(&self) -> ForeignPolicy {
        self.policy
    }

    fn rank<'a>(&self, letter: &'a Letter) -> Rank<'a> {
        if let Some(rank) = letter.key().and_then(|key| OrderTable::global().rank(key)) {
            return Rank::Native(rank);
        }
        let text = letter.as_str();
        match self.policy {
            ForeignPolicy::First => Rank::Before(text),
            ForeignPolicy::Last => Rank::After(text),
            ForeignPolicy::ByCodePoint if letter.base() < BLOCK_START => Rank::Before(text),
            ForeignPolicy::ByCodePoint => Rank::After(text),
        }
    }

    pub fn weight(&self, letter: &Letter) -> Weight {
        self.rank(letter).to_weight()
    }

    pub fn compare_letters(&self, a: &Letter, b: &Letter) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }

    /// Compares two words letter by letter. The first differing letter
    /// decides; if one word runs out first it is the smaller.
    pub fn compare_words(&self, a: &Word, b: &Word) -> Ordering {
        a.iter()
            .map(|letter| self.rank(letter))
            .cmp(b.iter().map(|letter| self.rank(letter)))
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.compare_words(&segment(a), &segment(b))
    }

    pub fn word_key(&self, word: &Word) -> SortKey {
        SortKey(word.iter().map(|letter| self.weight(letter)).collect())
    }

    pub fn sort_key(&self, text: &str) -> SortKey {
        self.word_key(&segment(text))
    }

    /// Stable in-place sort. Each item is segmented once.
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by_cached_key(|item| self.sort_key(item.as_ref()));
    }

    /// Returns a sorted copy and leaves `items` untouched.
    pub fn sorted<S: AsRef<str> + Clone>(&self, items: &[S]) -> Vec<S> {
        let mut out = items.to_vec();
        self.sort(&mut out);
        out
    }
}

/// Compares two strings in Tamil alphabetical order using the default
/// collator. Fits `slice::sort_by` directly.
pub fn word_compare(a: &str, b: &str) -> Ordering {
    Collator::default().compare(a, b)
}

/// A borrowed string ordered by [`word_compare`].
#[derive(Debug, Clone, Copy)]
pub struct TamilStr<'a>(pub &'a str);

impl PartialEq for TamilStr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TamilStr<'_> {}

impl PartialOrd for TamilStr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TamilStr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        word_compare(self.0, other.0)
    }
}

/// An owned string ordered by [`word_compare`]; usable as a `BTreeSet` or
/// `BTreeMap` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TamilString(pub String);

impl TamilString {
    pub fn as_tamil_str(&self) -> TamilStr<'_> {
        TamilStr(&self.0)
    }
}

impl From<&str> for TamilString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq for TamilString {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TamilString {}

impl PartialOrd for TamilString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TamilString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_tamil_str().cmp(&other.as_tamil_str())
    }
}
