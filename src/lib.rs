// src/lib.rs
//! Tamil letter segmentation and native alphabetical collation.
//!
//! Tamil letters are a base glyph plus optional vowel signs or a virama, and
//! their code points do not sort in alphabetical order. This crate splits text
//! into letters and orders words letter by letter against a fixed alphabet.
//!
//! ```
//! use thamil_collate::word_compare;
//!
//! let mut words = vec!["படம்", "மட்டம்", "குடம்"];
//! words.sort_by(|a, b| word_compare(a, b));
//! assert_eq!(words, ["குடம்", "படம்", "மட்டம்"]);
//! ```

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;
pub mod persistence;

pub use crate::config::{CollatorConfig, ForeignPolicy};
pub use crate::core::collator::{word_compare, Collator, SortKey, TamilStr, TamilString, Weight};
pub use crate::core::phoneme::{join_phonemes, phonemes};
pub use crate::core::segmenter::{letters, segment};
pub use crate::core::types::{Letter, LetterKind, Word};
pub use crate::error::{CollateError, Result};
pub use crate::lexicon::Lexicon;
