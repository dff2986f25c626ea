//! Property tests for segmentation and collation.
//!
//! Uses proptest to check the ordering laws a sort routine relies on.

use proptest::prelude::*;
use std::cmp::Ordering;
use thamil_collate::core::script::classify;
use thamil_collate::{join_phonemes, phonemes, segment, Collator, ForeignPolicy, LetterKind};

// ============================================================================
// Strategies
// ============================================================================

/// Strings built from Tamil letters, stray marks, ASCII and a few symbols, so
/// that native, foreign and malformed letters all show up.
fn mixed_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "க", "ங", "ட", "ம", "ஜ", "அ", "ஔ", "ஒ", "ஃ", "்", "ு", "ா", "ொ", "\u{0BC6}",
            "\u{0BD7}", "\u{200D}", "a", "Z", "1", " ", "-", "…", "௧",
        ]),
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

/// Well-formed Tamil words: an optional independent vowel, then letters
/// that are each a consonant with an optional sign.
fn tamil_word() -> impl Strategy<Value = String> {
    let vowel = prop::sample::select(vec!["", "அ", "இ", "உ", "ஏ", "ஔ"]);
    let letter = (
        prop::sample::select(vec!['க', 'ச', 'த', 'ம', 'ழ', 'ன', 'ஸ']),
        prop::sample::select(vec!["", "்", "ா", "ி", "ு", "ெ", "ை", "ொ", "ௌ"]),
    )
        .prop_map(|(c, sign)| format!("{c}{sign}"));
    (vowel, prop::collection::vec(letter, 0..8))
        .prop_map(|(vowel, letters)| format!("{vowel}{}", letters.concat()))
}

fn policy() -> impl Strategy<Value = ForeignPolicy> {
    prop::sample::select(vec![
        ForeignPolicy::First,
        ForeignPolicy::Last,
        ForeignPolicy::ByCodePoint,
    ])
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Segmentation loses nothing.
    #[test]
    fn segmentation_is_lossless(s in mixed_string()) {
        prop_assert_eq!(segment(&s).to_string(), s);
    }

    /// Native letters start with a base glyph; others are single code points.
    #[test]
    fn letters_are_well_formed(s in mixed_string()) {
        for letter in segment(&s).iter() {
            prop_assert!(!letter.as_str().is_empty());
            if letter.kind() == LetterKind::Native {
                prop_assert!(classify(letter.base()).is_base(), "{:?}", letter);
            } else {
                prop_assert_eq!(letter.as_str().chars().count(), 1);
            }
        }
    }

    #[test]
    fn compare_is_reflexive(s in mixed_string(), p in policy()) {
        prop_assert_eq!(Collator::new(p).compare(&s, &s), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in mixed_string(), b in mixed_string(), p in policy()) {
        let collator = Collator::new(p);
        prop_assert_eq!(collator.compare(&a, &b), collator.compare(&b, &a).reverse());
    }

    #[test]
    fn compare_is_transitive(
        a in mixed_string(),
        b in mixed_string(),
        c in mixed_string(),
        p in policy(),
    ) {
        let collator = Collator::new(p);
        let mut v = [a, b, c];
        v.sort_by(|x, y| collator.compare(x, y));
        prop_assert_ne!(collator.compare(&v[0], &v[1]), Ordering::Greater);
        prop_assert_ne!(collator.compare(&v[1], &v[2]), Ordering::Greater);
        prop_assert_ne!(collator.compare(&v[0], &v[2]), Ordering::Greater);
    }

    /// Equivalent words compare the same way against every third word.
    #[test]
    fn equivalence_is_consistent(a in tamil_word(), c in mixed_string(), p in policy()) {
        let collator = Collator::new(p);
        // Splitting ொ into ெ + ா gives an equivalent spelling.
        let b = a.replace('\u{0BCA}', "\u{0BC6}\u{0BBE}");
        prop_assert_eq!(collator.compare(&a, &b), Ordering::Equal);
        prop_assert_eq!(collator.compare(&a, &c), collator.compare(&b, &c));
    }

    #[test]
    fn sort_key_agrees_with_compare(a in mixed_string(), b in mixed_string(), p in policy()) {
        let collator = Collator::new(p);
        prop_assert_eq!(
            collator.sort_key(&a).cmp(&collator.sort_key(&b)),
            collator.compare(&a, &b)
        );
    }

    #[test]
    fn sorting_is_idempotent(words in prop::collection::vec(mixed_string(), 0..20), p in policy()) {
        let collator = Collator::new(p);
        let once = collator.sorted(&words);
        let twice = collator.sorted(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorted_output_is_ordered(words in prop::collection::vec(tamil_word(), 0..20)) {
        let collator = Collator::default();
        let sorted = collator.sorted(&words);
        for pair in sorted.windows(2) {
            prop_assert_ne!(collator.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn empty_sorts_first(words in prop::collection::vec(mixed_string(), 1..10), p in policy()) {
        let mut words = words;
        words.push(String::new());
        let sorted = Collator::new(p).sorted(&words);
        prop_assert_eq!(sorted[0].as_str(), "");
    }

    /// Splitting into phonemes and joining back is lossless on Tamil words.
    #[test]
    fn phoneme_round_trip(w in tamil_word()) {
        prop_assert_eq!(join_phonemes(&phonemes(&w)), w);
    }
}
