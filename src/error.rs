// src/error.rs
use thiserror::Error;

/// Errors from the collaborators around the collator: config files, the
/// environment and the lexicon store. Segmenting and comparing never fail.
#[derive(Debug, Error)]
pub enum CollateError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("persist: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("encode: {0}")]
    Encode(#[from] bincode::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown foreign-letter policy `{0}` (expected first, last or codepoint)")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, CollateError>;
