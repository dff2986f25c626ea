// src/config.rs
use crate::error::{CollateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Environment variable read by [`CollatorConfig::from_env`].
pub const FOREIGN_POLICY_ENV: &str = "THAMIL_FOREIGN";

/// Where letters without a Tamil rank sort relative to Tamil letters.
///
/// Fallback letters are foreign code points, orphan marks and mark clusters
/// that spell no letter. Among themselves they always compare by code point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeignPolicy {
    /// Before every Tamil letter.
    #[default]
    First,
    /// After every Tamil letter.
    Last,
    /// Code points below the Tamil block before Tamil letters, everything
    /// else after them.
    #[serde(rename = "codepoint")]
    ByCodePoint,
}

impl FromStr for ForeignPolicy {
    type Err = CollateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(ForeignPolicy::First),
            "last" => Ok(ForeignPolicy::Last),
            "codepoint" => Ok(ForeignPolicy::ByCodePoint),
            _ => Err(CollateError::InvalidPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ForeignPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ForeignPolicy::First => "first",
            ForeignPolicy::Last => "last",
            ForeignPolicy::ByCodePoint => "codepoint",
        })
    }
}

/// Collator settings, as stored in a JSON config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollatorConfig {
    pub foreign: ForeignPolicy,
}

impl CollatorConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reads `THAMIL_FOREIGN`. A missing variable gives the default; an
    /// unrecognised value is logged and ignored.
    pub fn from_env() -> Self {
        let foreign = match std::env::var(FOREIGN_POLICY_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring {}", FOREIGN_POLICY_ENV);
                ForeignPolicy::default()
            }),
            Err(_) => ForeignPolicy::default(),
        };
        Self { foreign }
    }
}
