// src/core/order.rs
use crate::core::script::{
    self, AYTHAM, BLOCK_LEN, BLOCK_START, CONSONANTS, VOWELS, VOWEL_SIGNS,
};
use crate::core::types::{LetterKey, Sign, SIGN_SLOTS};
use once_cell::sync::Lazy;
use tracing::debug;

/// Rank of every canonical Tamil letter, in native alphabetical order.
///
/// Stored as an arena indexed by `(base offset in the block) * SIGN_SLOTS +
/// sign slot`, so a lookup is one multiplication and one index. Cells that do
/// not name a letter of the alphabet (a vowel with a virama, say) are empty.
pub struct OrderTable {
    ranks: Vec<Option<u16>>,
    len: usize,
}

static ORDER_TABLE: Lazy<OrderTable> = Lazy::new(OrderTable::build);

impl OrderTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static OrderTable {
        &ORDER_TABLE
    }

    /// Lays the alphabet out in order: the twelve vowels, the aytham, then
    /// for each consonant its mei, its bare form and its eleven vowel-sign
    /// forms.
    fn build() -> Self {
        let mut table = Self { ranks: vec![None; BLOCK_LEN * SIGN_SLOTS], len: 0 };

        for &vowel in &VOWELS {
            table.push(LetterKey { base: vowel, sign: Sign::Inherent });
        }
        table.push(LetterKey { base: AYTHAM, sign: Sign::Inherent });
        for &consonant in &CONSONANTS {
            table.push(LetterKey { base: consonant, sign: Sign::Virama });
            table.push(LetterKey { base: consonant, sign: Sign::Inherent });
            for i in 0..VOWEL_SIGNS.len() {
                table.push(LetterKey { base: consonant, sign: Sign::Vowel(i as u8) });
            }
        }

        debug!(entries = table.len, "built Tamil order table");
        table
    }

    fn push(&mut self, key: LetterKey) {
        if let Some(cell) = Self::cell(key) {
            self.ranks[cell] = Some(self.len as u16);
            self.len += 1;
        }
    }

    fn cell(key: LetterKey) -> Option<usize> {
        if !script::in_block(key.base) {
            return None;
        }
        let row = key.base as usize - BLOCK_START as usize;
        Some(row * SIGN_SLOTS + key.sign.slot())
    }

    /// Rank of a canonical letter, or `None` if the key is not a letter of
    /// the alphabet.
    pub fn rank(&self, key: LetterKey) -> Option<u16> {
        Self::cell(key).and_then(|cell| self.ranks[cell])
    }

    /// Number of ranked letters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segmenter::segment;

    fn rank_of(text: &str) -> Option<u16> {
        let word = segment(text);
        word.letters()[0].key().and_then(|key| OrderTable::global().rank(key))
    }

    #[test]
    fn covers_the_alphabet() {
        assert_eq!(OrderTable::global().len(), 12 + 1 + 23 * 13);
    }

    #[test]
    fn vowels_then_aytham_then_consonants() {
        assert_eq!(rank_of("அ"), Some(0));
        assert_eq!(rank_of("ஔ"), Some(11));
        assert_eq!(rank_of("ஃ"), Some(12));
        assert_eq!(rank_of("க்"), Some(13));
        assert!(rank_of("ஔ") < rank_of("க்"));
    }

    #[test]
    fn mei_precedes_uyirmei() {
        assert!(rank_of("ட்") < rank_of("ட"));
        assert!(rank_of("ட") < rank_of("டா"));
        assert!(rank_of("டு") < rank_of("டௌ"));
    }

    #[test]
    fn base_rank_dominates_signs() {
        // The last form of one consonant sorts before the mei of the next.
        assert!(rank_of("கௌ") < rank_of("ங்"));
        assert!(rank_of("னௌ") < rank_of("ஜ்"));
    }

    #[test]
    fn arena_spans_the_block() {
        let table = OrderTable::global();
        assert_eq!(table.ranks.len(), BLOCK_LEN * SIGN_SLOTS);
        let last = LetterKey { base: '\u{0BFF}', sign: Sign::Vowel(10) };
        assert_eq!(table.rank(last), None);
    }

    #[test]
    fn invalid_keys_have_no_rank() {
        let key = LetterKey { base: 'அ', sign: Sign::Virama };
        assert_eq!(OrderTable::global().rank(key), None);
        let key = LetterKey { base: 'a', sign: Sign::Inherent };
        assert_eq!(OrderTable::global().rank(key), None);
    }
}
