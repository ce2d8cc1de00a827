//! Options of a bulk check run.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Run options. Every field is optional in a JSON config file; missing ones
/// keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Ask the engine for suggestions for misspelled words
    pub suggest: bool,
    /// Stop after this many words
    pub max_words: Option<usize>,
    /// Minimum percentage of correct words for the run to pass
    pub threshold: Option<f64>,
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            suggest: true,
            max_words: None,
            threshold: None,
        }
    }
}

impl RunConfig {
    /// Read a config from a JSON file.
    pub fn from_path(path: &Path) -> Result<RunConfig, Error> {
        let config_error = |source: Box<dyn std::error::Error + Send + Sync>| Error::Config {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(path).map_err(|e| config_error(e.into()))?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|e| config_error(e.into()))
    }

    /// Whether `pct_correct` meets the threshold. Always true without one.
    pub fn passes(&self, pct_correct: f64) -> bool {
        match self.threshold {
            Some(threshold) => pct_correct >= threshold,
            None => true,
        }
    }
}
