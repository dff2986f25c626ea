// src/core/script.rs
use once_cell::sync::Lazy;

/// First code point of the Tamil Unicode block.
pub const BLOCK_START: char = '\u{0B80}';
/// Number of code points in the Tamil block.
pub const BLOCK_LEN: usize = 0x80;

pub const VIRAMA: char = '\u{0BCD}';
pub const AYTHAM: char = '\u{0B83}';
pub const ANUSVARA: char = '\u{0B82}';
/// Second half of the two-part vowel sign ௌ (and of the vowel ஔ).
pub const AU_LENGTH_MARK: char = '\u{0BD7}';
pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';

/// Independent vowels (uyir) in alphabetical order.
pub const VOWELS: [char; 12] = [
    '\u{0B85}', // அ
    '\u{0B86}', // ஆ
    '\u{0B87}', // இ
    '\u{0B88}', // ஈ
    '\u{0B89}', // உ
    '\u{0B8A}', // ஊ
    '\u{0B8E}', // எ
    '\u{0B8F}', // ஏ
    '\u{0B90}', // ஐ
    '\u{0B92}', // ஒ
    '\u{0B93}', // ஓ
    '\u{0B94}', // ஔ
];

/// Dependent vowel signs. `VOWEL_SIGNS[i]` spells `VOWELS[i + 1]` after a
/// consonant; அ has no sign because it is the consonant's inherent vowel.
pub const VOWEL_SIGNS: [char; 11] = [
    '\u{0BBE}', // ா
    '\u{0BBF}', // ி
    '\u{0BC0}', // ீ
    '\u{0BC1}', // ு
    '\u{0BC2}', // ூ
    '\u{0BC6}', // ெ
    '\u{0BC7}', // ே
    '\u{0BC8}', // ை
    '\u{0BCA}', // ொ
    '\u{0BCB}', // ோ
    '\u{0BCC}', // ௌ
];

/// Consonants in alphabetical order: the 18 native consonants, then grantha.
pub const CONSONANTS: [char; 23] = [
    '\u{0B95}', // க
    '\u{0B99}', // ங
    '\u{0B9A}', // ச
    '\u{0B9E}', // ஞ
    '\u{0B9F}', // ட
    '\u{0BA3}', // ண
    '\u{0BA4}', // த
    '\u{0BA8}', // ந
    '\u{0BAA}', // ப
    '\u{0BAE}', // ம
    '\u{0BAF}', // ய
    '\u{0BB0}', // ர
    '\u{0BB2}', // ல
    '\u{0BB5}', // வ
    '\u{0BB4}', // ழ
    '\u{0BB3}', // ள
    '\u{0BB1}', // ற
    '\u{0BA9}', // ன
    '\u{0B9C}', // ஜ
    '\u{0BB6}', // ஶ
    '\u{0BB7}', // ஷ
    '\u{0BB8}', // ஸ
    '\u{0BB9}', // ஹ
];

/// Orthographic role of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Independent vowel; the index is its position in [`VOWELS`].
    Vowel(u8),
    Aytham,
    /// Consonant; the index is its position in [`CONSONANTS`].
    Consonant(u8),
    /// Dependent vowel sign; the index is its position in [`VOWEL_SIGNS`].
    VowelSign(u8),
    Virama,
    /// Any other mark that attaches to the preceding letter: the au length
    /// mark, anusvara and the zero-width joiners.
    Modifier,
    /// Anything that is not part of a Tamil letter.
    Other,
}

impl CharClass {
    /// True for code points that open a new letter.
    pub fn is_base(self) -> bool {
        matches!(self, CharClass::Vowel(_) | CharClass::Aytham | CharClass::Consonant(_))
    }

    /// True for code points that can only extend a preceding letter.
    pub fn is_combining(self) -> bool {
        matches!(
            self,
            CharClass::VowelSign(_) | CharClass::Virama | CharClass::Modifier
        )
    }
}

static BLOCK_CLASSES: Lazy<[CharClass; BLOCK_LEN]> = Lazy::new(|| {
    let mut table = [CharClass::Other; BLOCK_LEN];
    let slot = |c: char| c as usize - BLOCK_START as usize;

    for (i, &v) in VOWELS.iter().enumerate() {
        table[slot(v)] = CharClass::Vowel(i as u8);
    }
    for (i, &k) in CONSONANTS.iter().enumerate() {
        table[slot(k)] = CharClass::Consonant(i as u8);
    }
    for (i, &s) in VOWEL_SIGNS.iter().enumerate() {
        table[slot(s)] = CharClass::VowelSign(i as u8);
    }
    table[slot(AYTHAM)] = CharClass::Aytham;
    table[slot(VIRAMA)] = CharClass::Virama;
    table[slot(AU_LENGTH_MARK)] = CharClass::Modifier;
    table[slot(ANUSVARA)] = CharClass::Modifier;
    table
});

/// Classifies a code point. O(1): a table lookup inside the Tamil block.
pub fn classify(c: char) -> CharClass {
    match c {
        ZWNJ | ZWJ => CharClass::Modifier,
        _ => {
            let offset = (c as u32).wrapping_sub(BLOCK_START as u32) as usize;
            BLOCK_CLASSES.get(offset).copied().unwrap_or(CharClass::Other)
        }
    }
}

/// Returns `true` if the code point lies in the Tamil block.
pub fn in_block(c: char) -> bool {
    (c as u32).wrapping_sub(BLOCK_START as u32) < BLOCK_LEN as u32
}
