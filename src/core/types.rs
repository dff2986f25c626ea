// src/core/types.rs
use serde::{Deserialize, Serialize};

/// How the segmenter recognised a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterKind {
    /// A Tamil base glyph plus its trailing marks.
    Native,
    /// A single code point outside the Tamil letter inventory (digits,
    /// punctuation, Latin, whitespace, Tamil numerals and symbols).
    Foreign,
    /// A combining mark with no base to attach to.
    Malformed,
}

/// One indivisible sortable unit of text.
///
/// A `Native` letter is exactly one base glyph followed by zero or more
/// combining marks. `Foreign` and `Malformed` letters hold a single code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter {
    text: String,
    kind: LetterKind,
}

impl Letter {
    pub(crate) fn new(text: String, kind: LetterKind) -> Self {
        debug_assert!(!text.is_empty());
        Self { text, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LetterKind {
        self.kind
    }

    /// The first code point: the base glyph of a native letter.
    pub fn base(&self) -> char {
        // Letters are never empty.
        self.text.chars().next().unwrap_or_default()
    }

    /// The code points following the base.
    pub fn marks(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().skip(1)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The vowel part of a canonical letter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// No mark: a vowel, the aytham, or a consonant with its inherent அ.
    Inherent,
    /// Consonant with virama: a pure consonant (mei).
    Virama,
    /// Consonant with the vowel sign at this index of `VOWEL_SIGNS`.
    Vowel(u8),
}

/// Number of distinct [`Sign`] values; the width of one base's row in the
/// order table.
pub const SIGN_SLOTS: usize = 13;

impl Sign {
    /// Column of this sign in the order table. The column order is the
    /// collation order within one base: mei, then அ, then ஆ .. ஔ.
    pub fn slot(self) -> usize {
        match self {
            Sign::Virama => 0,
            Sign::Inherent => 1,
            Sign::Vowel(i) => 2 + i as usize,
        }
    }
}

/// The canonical form of a native letter: its base and a single folded sign.
/// Two letters that spell the same thing with different code points (a split
/// two-part vowel sign, a stray joiner) share one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterKey {
    pub base: char,
    pub sign: Sign,
}

/// A string split into letters. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    pub(crate) fn from_letters(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// True if `prefix`'s letters are the first letters of `self`, letter by
    /// letter. "க" is not a letter prefix of "கு".
    pub fn starts_with(&self, prefix: &Word) -> bool {
        self.letters.starts_with(&prefix.letters)
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Letter;
    type IntoIter = std::slice::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            f.write_str(letter.as_str())?;
        }
        Ok(())
    }
}
