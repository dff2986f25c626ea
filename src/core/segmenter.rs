// src/core/segmenter.rs
use crate::core::script::{self, CharClass, AU_LENGTH_MARK, VIRAMA, ZWJ, ZWNJ};
use crate::core::types::{Letter, LetterKey, LetterKind, Sign, Word};

const SIGN_E: char = '\u{0BC6}';
const SIGN_EE: char = '\u{0BC7}';
const SIGN_AA: char = '\u{0BBE}';
const VOWEL_O: char = '\u{0B92}';
const VOWEL_AU: char = '\u{0B94}';

/// Splits text into letters, scanning left to right.
///
/// A base glyph opens a letter and the combining marks after it join that
/// letter. Anything else becomes a single code point `Foreign` letter, and a
/// mark with nothing to attach to becomes a `Malformed` letter. Total over all
/// input; concatenating the letters gives back `text`.
pub fn segment(text: &str) -> Word {
    let mut letters = Vec::new();
    let mut current: Option<String> = None;

    for c in text.chars() {
        let class = script::classify(c);
        if class.is_base() {
            if let Some(done) = current.replace(c.to_string()) {
                letters.push(Letter::new(done, LetterKind::Native));
            }
        } else if class.is_combining() {
            match current.as_mut() {
                Some(open) => open.push(c),
                None => letters.push(Letter::new(c.to_string(), LetterKind::Malformed)),
            }
        } else {
            if let Some(done) = current.take() {
                letters.push(Letter::new(done, LetterKind::Native));
            }
            letters.push(Letter::new(c.to_string(), LetterKind::Foreign));
        }
    }
    if let Some(done) = current {
        letters.push(Letter::new(done, LetterKind::Native));
    }

    Word::from_letters(letters)
}

/// The letters of `text` as owned strings.
pub fn letters(text: &str) -> Vec<String> {
    segment(text)
        .iter()
        .map(|letter| letter.as_str().to_string())
        .collect()
}

impl Letter {
    /// Folds a native letter to its canonical key.
    ///
    /// Joiners are dropped, split two-part vowel signs (ெ+ா, ே+ா, ெ+ௗ) are
    /// merged into their single-code-point forms and ஒ+ௗ becomes ஔ. Returns
    /// `None` for foreign and malformed letters and for mark clusters that
    /// spell no single letter.
    pub fn key(&self) -> Option<LetterKey> {
        if self.kind() != LetterKind::Native {
            return None;
        }
        let base = self.base();
        let mut marks = [None; 2];
        let mut count = 0;
        for mark in self.marks().filter(|&m| m != ZWJ && m != ZWNJ) {
            if count == marks.len() {
                return None;
            }
            marks[count] = Some(mark);
            count += 1;
        }

        let sign = match (base, marks) {
            (_, [None, None]) => Sign::Inherent,
            (VOWEL_O, [Some(AU_LENGTH_MARK), None]) => {
                return Some(LetterKey { base: VOWEL_AU, sign: Sign::Inherent });
            }
            (_, [Some(VIRAMA), None]) => Sign::Virama,
            (_, [Some(SIGN_E), Some(SIGN_AA)]) => Sign::Vowel(8),
            (_, [Some(SIGN_EE), Some(SIGN_AA)]) => Sign::Vowel(9),
            (_, [Some(SIGN_E), Some(AU_LENGTH_MARK)]) => Sign::Vowel(10),
            (_, [Some(mark), None]) => match script::classify(mark) {
                CharClass::VowelSign(i) => Sign::Vowel(i),
                _ => return None,
            },
            _ => return None,
        };
        Some(LetterKey { base, sign })
    }
}
