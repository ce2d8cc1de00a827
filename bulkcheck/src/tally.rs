//! Running counters of a bulk check.
use serde::Serialize;

/// Counts accumulated while words are checked.
///
/// Only four counts are stored; everything else is derived so that the
/// space/no-space and correct/incorrect partitions always add up.
#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    total: u64,
    total_with_space: u64,
    correct: u64,
    correct_with_space: u64,
}

impl Tally {
    /// An empty tally.
    pub fn new() -> Tally {
        Tally::default()
    }

    /// Count one checked word.
    pub fn record(&mut self, has_space: bool, is_correct: bool) {
        self.total += 1;

        if has_space {
            self.total_with_space += 1;
        }

        if is_correct {
            self.correct += 1;

            if has_space {
                self.correct_with_space += 1;
            }
        }
    }

    /// Number of words checked.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of words containing a space.
    pub fn total_with_space(&self) -> u64 {
        self.total_with_space
    }

    /// Number of words without a space.
    pub fn total_without_space(&self) -> u64 {
        self.total - self.total_with_space
    }

    /// Number of correctly spelled words.
    pub fn correct(&self) -> u64 {
        self.correct
    }

    /// Number of misspelled words.
    pub fn incorrect(&self) -> u64 {
        self.total - self.correct
    }

    /// Number of correctly spelled words containing a space.
    pub fn correct_with_space(&self) -> u64 {
        self.correct_with_space
    }

    /// Number of misspelled words containing a space.
    pub fn incorrect_with_space(&self) -> u64 {
        self.total_with_space - self.correct_with_space
    }

    /// Number of correctly spelled words without a space.
    pub fn correct_without_space(&self) -> u64 {
        self.correct - self.correct_with_space
    }

    /// Number of misspelled words without a space.
    pub fn incorrect_without_space(&self) -> u64 {
        self.total_without_space() - self.correct_without_space()
    }

    /// Whether no word has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
