//! Errors that abort a bulk check run.
use std::path::PathBuf;

use crate::engine::EngineError;

/// Fatal errors of a bulk check run. There are no per-word errors: every
/// line of input is checked as a literal word.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The affix file or a dictionary could not be loaded by the engine
    #[error("Failed to load speller configuration")]
    Configuration(#[from] EngineError),

    /// The word list could not be opened
    #[error("Could not open file of words to check '{}'", .path.display())]
    InputUnavailable {
        /// Path of the word list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The word list was opened but contained no lines
    #[error("No words to check")]
    EmptyInput,

    /// The run configuration file could not be read or parsed
    #[error("Failed to load run configuration '{}'", .path.display())]
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying read or parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading words or writing results failed
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
