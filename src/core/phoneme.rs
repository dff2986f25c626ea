// src/core/phoneme.rs
use crate::core::script::{self, CharClass, VIRAMA, VOWELS, VOWEL_SIGNS};
use crate::core::segmenter::segment;
use crate::core::types::{Letter, Sign};

impl Letter {
    /// Splits a consonant-vowel letter (uyirmei) into its pure consonant
    /// (mei) and its vowel (uyir): கு → [க், உ], க → [க், அ].
    ///
    /// Vowels, mei, the aytham and letters with no canonical key come back
    /// unchanged as a single phoneme.
    pub fn phonemes(&self) -> Vec<String> {
        let key = match self.key() {
            Some(key) if matches!(script::classify(key.base), CharClass::Consonant(_)) => key,
            _ => return vec![self.as_str().to_string()],
        };
        let mei: String = [key.base, VIRAMA].iter().collect();
        match key.sign {
            Sign::Virama => vec![mei],
            Sign::Inherent => vec![mei, VOWELS[0].to_string()],
            Sign::Vowel(i) => vec![mei, VOWELS[i as usize + 1].to_string()],
        }
    }
}

/// The phonemes of every letter of `text`, in order.
pub fn phonemes(text: &str) -> Vec<String> {
    segment(text).iter().flat_map(Letter::phonemes).collect()
}

/// Joins phonemes back into text, fusing each mei that is directly followed
/// by a vowel into one uyirmei letter. Inverse of [`phonemes`] on canonical
/// Tamil text.
pub fn join_phonemes<S: AsRef<str>>(phonemes: &[S]) -> String {
    let mut out = String::new();
    let mut iter = phonemes.iter().map(AsRef::as_ref).peekable();

    while let Some(phoneme) = iter.next() {
        let consonant = mei_consonant(phoneme);
        let vowel = iter.peek().and_then(|next| vowel_index(next));
        match (consonant, vowel) {
            (Some(c), Some(v)) => {
                out.push(c);
                if v > 0 {
                    out.push(VOWEL_SIGNS[v - 1]);
                }
                iter.next();
            }
            _ => out.push_str(phoneme),
        }
    }
    out
}

/// The consonant of a phoneme spelled exactly consonant + virama.
fn mei_consonant(phoneme: &str) -> Option<char> {
    let mut chars = phoneme.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), Some(VIRAMA), None)
            if matches!(script::classify(c), CharClass::Consonant(_)) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn vowel_index(phoneme: &str) -> Option<usize> {
    let mut chars = phoneme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match script::classify(c) {
            CharClass::Vowel(i) => Some(i as usize),
            _ => None,
        },
        _ => None,
    }
}
