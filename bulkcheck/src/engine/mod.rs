//! Spelling engines that a bulk check can be run against.
//!
//! The evaluator only needs to ask two questions of an engine: is this word
//! correct, and what should it be instead. Everything linguistic lives
//! behind [`SpellEngine`].
use std::path::Path;

pub mod error;
pub mod hunspell;

pub use self::error::EngineError;
pub use self::hunspell::HunspellEngine;

/// A spell-checking engine built from an affix file and a dictionary.
pub trait SpellEngine {
    /// Construct the engine from an affix file and its primary dictionary.
    fn open(affix: &Path, dictionary: &Path) -> Result<Self, EngineError>
    where
        Self: Sized;

    /// Load a supplementary dictionary (for example a medical or personal
    /// word list) that has no affix file of its own. Must be called before
    /// any word is checked.
    fn add_dictionary(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Whether the word or phrase is correctly spelled.
    fn spell(&self, word: &str) -> bool;

    /// Suggested replacements, in the engine's ranking order. May be empty
    /// even for an incorrect word.
    fn suggest(&self, word: &str) -> Vec<String>;
}
