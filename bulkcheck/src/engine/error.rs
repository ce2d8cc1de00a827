//! Engine-related errors.
use std::path::PathBuf;

/// Errors that can occur while constructing a spelling engine or loading
/// dictionaries into it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Error opening or reading an affix or dictionary file
    #[error("I/O error reading '{}'", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// The affix and dictionary pair could not be compiled
    #[error(
        "Failed to compile '{}' with '{}': {message}",
        .dictionary.display(),
        .affix.display()
    )]
    Parse {
        /// Affix file of the pair
        affix: PathBuf,
        /// Primary dictionary of the pair
        dictionary: PathBuf,
        /// Parser message, naming the file and line at fault
        message: String,
    },
}
