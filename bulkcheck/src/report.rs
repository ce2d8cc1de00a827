//! Final accuracy report derived from a [`Tally`].
use serde::Serialize;

use crate::tally::Tally;

/// Identifiers of the inputs a run was made with, printed ahead of the
/// statistics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Sources {
    /// Affix file
    pub affix: String,
    /// Primary dictionary
    pub dictionary: String,
    /// Word list
    pub wordlist: String,
}

/// Aggregate statistics of a finished run: every raw count plus the
/// percentages derived from them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    /// Number of words checked
    pub total: u64,
    /// Correctly spelled words
    pub correct: u64,
    /// Misspelled words
    pub incorrect: u64,
    /// Words containing a space
    pub total_with_space: u64,
    /// Correctly spelled words containing a space
    pub correct_with_space: u64,
    /// Misspelled words containing a space
    pub incorrect_with_space: u64,
    /// Words without a space
    pub total_without_space: u64,
    /// Correctly spelled words without a space
    pub correct_without_space: u64,
    /// Misspelled words without a space
    pub incorrect_without_space: u64,

    /// Share of words without a space
    pub pct_without_space: f64,
    /// Share of words containing a space
    pub pct_with_space: f64,
    /// Share of correctly spelled words
    pub pct_correct: f64,
    /// Share of misspelled words
    pub pct_incorrect: f64,
    /// Share of correct words among those containing a space
    pub pct_correct_with_space: f64,
    /// Share of misspelled words among those containing a space
    pub pct_incorrect_with_space: f64,
    /// Share of correct words among those without a space
    pub pct_correct_without_space: f64,
    /// Share of misspelled words among those without a space
    pub pct_incorrect_without_space: f64,
}

/// `part` as a percentage of `whole`. An empty group counts as entirely
/// correct, so it is never reported as containing misspellings.
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 100.0;
    }
    100.0 * part as f64 / whole as f64
}

impl Report {
    /// Compute the report. The tally is expected to hold at least one word;
    /// the evaluator refuses to produce an empty one.
    pub fn new(tally: &Tally) -> Report {
        let pct_without_space = percentage(tally.total_without_space(), tally.total());
        let pct_correct = percentage(tally.correct(), tally.total());
        let pct_correct_with_space =
            percentage(tally.correct_with_space(), tally.total_with_space());
        let pct_correct_without_space =
            percentage(tally.correct_without_space(), tally.total_without_space());

        Report {
            total: tally.total(),
            correct: tally.correct(),
            incorrect: tally.incorrect(),
            total_with_space: tally.total_with_space(),
            correct_with_space: tally.correct_with_space(),
            incorrect_with_space: tally.incorrect_with_space(),
            total_without_space: tally.total_without_space(),
            correct_without_space: tally.correct_without_space(),
            incorrect_without_space: tally.incorrect_without_space(),

            pct_without_space,
            pct_with_space: 100.0 - pct_without_space,
            pct_correct,
            pct_incorrect: 100.0 - pct_correct,
            pct_correct_with_space,
            pct_incorrect_with_space: 100.0 - pct_correct_with_space,
            pct_correct_without_space,
            pct_incorrect_without_space: 100.0 - pct_correct_without_space,
        }
    }

    /// Pair the report with the identifiers of its inputs for printing or
    /// serializing.
    pub fn summary<'a>(&'a self, sources: &'a Sources) -> Summary<'a> {
        Summary {
            sources,
            report: self,
        }
    }
}

/// A report together with its sources. Displays as tab-separated
/// label/value lines.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    /// Inputs of the run
    pub sources: &'a Sources,
    /// Statistics of the run
    #[serde(flatten)]
    pub report: &'a Report,
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let r = self.report;

        writeln!(f, "Hunspell affix\t{}", self.sources.affix)?;
        writeln!(f, "Hunspell dict\t{}", self.sources.dictionary)?;
        writeln!(f, "wordlist\t{}", self.sources.wordlist)?;

        writeln!(f, "percentage of words without space\t{:06.2}", r.pct_without_space)?;
        writeln!(f, "percentage of words with space\t{:06.2}", r.pct_with_space)?;

        writeln!(f, "number of words\t{}", r.total)?;
        writeln!(f, "number of correct words\t{}", r.correct)?;
        writeln!(f, "number of incorrect words\t{}", r.incorrect)?;
        writeln!(f, "percentage of correct words\t{:06.2}", r.pct_correct)?;
        writeln!(f, "percentage of incorrect words\t{:06.2}", r.pct_incorrect)?;

        writeln!(f, "number of words without space\t{}", r.total_without_space)?;
        writeln!(
            f,
            "number of correct words without space\t{}",
            r.correct_without_space
        )?;
        writeln!(
            f,
            "number of incorrect words without space\t{}",
            r.incorrect_without_space
        )?;
        writeln!(
            f,
            "percentage of correct words without space\t{:06.2}",
            r.pct_correct_without_space
        )?;
        writeln!(
            f,
            "percentage of incorrect words without space\t{:06.2}",
            r.pct_incorrect_without_space
        )?;

        writeln!(f, "number of words with space\t{}", r.total_with_space)?;
        writeln!(
            f,
            "number of correct words with space\t{}",
            r.correct_with_space
        )?;
        writeln!(
            f,
            "number of incorrect words with space\t{}",
            r.incorrect_with_space
        )?;
        writeln!(
            f,
            "percentage of correct words with space\t{:06.2}",
            r.pct_correct_with_space
        )?;
        writeln!(
            f,
            "percentage of incorrect words with space\t{:06.2}",
            r.pct_incorrect_with_space
        )
    }
}
