//! Hunspell-compatible engine backed by `spellbook`.
use std::path::Path;

use spellbook::Dictionary;

use super::{EngineError, SpellEngine};

/// Engine compiled from a Hunspell `.aff`/`.dic` pair.
pub struct HunspellEngine {
    dict: Dictionary,
}

impl std::fmt::Debug for HunspellEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HunspellEngine").finish_non_exhaustive()
    }
}

impl SpellEngine for HunspellEngine {
    fn open(affix: &Path, dictionary: &Path) -> Result<Self, EngineError> {
        let aff = read_text(affix)?;
        let dic = read_text(dictionary)?;

        let dict = Dictionary::new(&aff, &dic).map_err(|e| EngineError::Parse {
            affix: affix.to_path_buf(),
            dictionary: dictionary.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!(
            "Compiled '{}' with '{}'",
            dictionary.display(),
            affix.display()
        );

        Ok(HunspellEngine { dict })
    }

    fn add_dictionary(&mut self, path: &Path) -> Result<(), EngineError> {
        let text = read_text(path)?;
        let mut added = 0usize;

        for (index, line) in text.lines().enumerate() {
            // Morphological fields follow the entry after a tab.
            let entry = line.split('\t').next().unwrap_or_default().trim_end();
            if entry.is_empty() {
                continue;
            }
            // .dic files usually open with the number of entries.
            if index == 0 && entry.trim_start().parse::<usize>().is_ok() {
                continue;
            }

            match self.dict.add(entry) {
                Ok(()) => added += 1,
                Err(e) => log::warn!(
                    "Skipping entry {:?} in '{}': {}",
                    entry,
                    path.display(),
                    e
                ),
            }
        }

        log::debug!("Added {} words from '{}'", added, path.display());
        Ok(())
    }

    fn spell(&self, word: &str) -> bool {
        self.dict.check(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        self.dict.suggest(word, &mut suggestions);
        suggestions
    }
}

/// Read an affix or dictionary file into a string. Files that are not UTF-8
/// (older dictionaries are often ISO 8859 encoded) are decoded with the
/// detected encoding.
fn read_text(path: &Path) -> Result<String, EngineError> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::Io(path.to_path_buf(), e))?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(&bytes, true);
            let encoding = detector.guess(None, true);
            log::warn!(
                "'{}' is not valid UTF-8, decoding as {}",
                path.display(),
                encoding.name()
            );
            decode(&bytes, encoding)
        }
    };

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

fn decode(bytes: &[u8], encoding: &'static encoding_rs::Encoding) -> String {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::warn!("Malformed {} sequences were replaced", encoding.name());
    }
    text.into_owned()
}
