// File: src/persistence.rs
use crate::config::CollatorConfig;
use crate::core::collator::Collator;
use crate::error::Result;
use crate::lexicon::Lexicon;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// The on-disk form of a lexicon.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    config: CollatorConfig,
    words: Vec<String>,
}

/// Writes the lexicon with bincode through a temp file in the target
/// directory, then renames it into place, so a crash never leaves a torn file.
pub fn save_to_disk(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        config: CollatorConfig { foreign: lexicon.collator().policy() },
        words: lexicon.words().to_vec(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(temp_file.as_file());
    bincode::serialize_into(&mut writer, &state)?;
    writer.flush()?;
    drop(writer);
    temp_file.persist(path)?;

    info!(path = %path.display(), words = state.words.len(), "saved lexicon");
    Ok(())
}

/// Reads a lexicon written by [`save_to_disk`].
///
/// The words are re-sorted on load, so a file written under a different
/// foreign policy or edited by hand still yields a correctly ordered lexicon.
pub fn load_from_disk(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    debug!(path = %path.display(), words = state.words.len(), "loaded lexicon");
    Ok(Lexicon::from_words(Collator::from_config(&state.config), state.words))
}

/// Loads `path` if it holds a lexicon, otherwise starts an empty one.
///
/// The lexicon always uses `collator`; words stored under another foreign
/// policy are re-sorted.
pub fn load_or_new(path: &Path, collator: Collator) -> Lexicon {
    match load_from_disk(path) {
        Ok(lexicon) if lexicon.collator() == collator => lexicon,
        Ok(lexicon) => {
            info!(
                path = %path.display(),
                stored = %lexicon.collator().policy(),
                requested = %collator.policy(),
                "re-sorting lexicon under requested policy"
            );
            Lexicon::from_words(collator, lexicon.words().iter().cloned())
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "starting empty lexicon");
            Lexicon::new(collator)
        }
    }
}
