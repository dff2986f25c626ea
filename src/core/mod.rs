// src/core/mod.rs
pub mod collator;
pub mod order;
pub mod phoneme;
pub mod script;
pub mod segmenter;
pub mod types;
