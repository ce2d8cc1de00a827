//! The bulk evaluation loop.
//!
//! Words are read one line at a time, checked, counted and handed out
//! before the next line is read, so memory use does not grow with the size
//! of the word list.
use std::borrow::Cow;
use std::io::BufRead;

use crate::config::RunConfig;
use crate::engine::SpellEngine;
use crate::error::Error;
use crate::report::Report;
use crate::tally::Tally;
use crate::writer::RecordWriter;

/// Result of checking one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// The line as read, without its line terminator
    pub text: String,
    /// Whether `text` contains a space
    pub has_space: bool,
    /// Whether the engine accepted `text`
    pub is_correct: bool,
    /// Engine suggestions, only filled in for incorrect words
    pub suggestions: Vec<String>,
}

impl WordRecord {
    fn check<E: SpellEngine + ?Sized>(engine: &E, text: String, suggest: bool) -> WordRecord {
        let has_space = text.contains(' ');
        let is_correct = engine.spell(&text);

        let suggestions = if !is_correct && suggest {
            engine.suggest(&text)
        } else {
            vec![]
        };

        WordRecord {
            text,
            has_space,
            is_correct,
            suggestions,
        }
    }
}

/// A single pass over a word list.
///
/// Yields one [`WordRecord`] per line; the counts are handed over by
/// [`Evaluation::finish`] once the input is exhausted.
pub struct Evaluation<'e, E: ?Sized, R> {
    engine: &'e E,
    reader: R,
    buf: Vec<u8>,
    tally: Tally,
    suggest: bool,
    remaining: Option<usize>,
    done: bool,
}

impl<'e, E, R> Evaluation<'e, E, R>
where
    E: SpellEngine + ?Sized,
    R: BufRead,
{
    /// Start evaluating the lines of `reader` against `engine`.
    pub fn new(engine: &'e E, reader: R) -> Evaluation<'e, E, R> {
        Evaluation {
            engine,
            reader,
            buf: Vec::with_capacity(256),
            tally: Tally::new(),
            suggest: true,
            remaining: None,
            done: false,
        }
    }

    /// Apply the options of a run config.
    pub fn with_config(self, config: &RunConfig) -> Evaluation<'e, E, R> {
        Evaluation {
            suggest: config.suggest,
            remaining: config.max_words,
            ..self
        }
    }

    /// Counts so far.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Hand over the final counts. Fails with [`Error::EmptyInput`] when no
    /// word was checked, since no percentage could be computed.
    pub fn finish(self) -> Result<Tally, Error> {
        if self.tally.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(self.tally)
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        Ok(Some(match String::from_utf8_lossy(&self.buf) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                log::warn!(
                    "Line {} is not valid UTF-8: {:?}",
                    self.tally.total() + 1,
                    text
                );
                text
            }
        }))
    }
}

impl<'e, E, R> Iterator for Evaluation<'e, E, R>
where
    E: SpellEngine + ?Sized,
    R: BufRead,
{
    type Item = Result<WordRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.remaining == Some(0) {
            log::debug!("Word limit reached after {} words", self.tally.total());
            self.done = true;
            return None;
        }

        let text = match self.read_line() {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        let record = WordRecord::check(self.engine, text, self.suggest);
        self.tally.record(record.has_space, record.is_correct);

        Some(Ok(record))
    }
}

/// Check every line of `reader`, streaming each result to `writer`, and
/// compute the report.
///
/// Results already written stay written if the run fails; no report is
/// produced for an empty word list.
pub fn run<E, R, W>(
    engine: &E,
    reader: R,
    writer: &mut W,
    config: &RunConfig,
) -> Result<Report, Error>
where
    E: SpellEngine + ?Sized,
    R: BufRead,
    W: RecordWriter + ?Sized,
{
    let mut evaluation = Evaluation::new(engine, reader).with_config(config);

    for record in &mut evaluation {
        writer.write_record(&record?)?;
    }
    writer.finish()?;

    let tally = evaluation.finish()?;
    log::info!(
        "Checked {} words, {} correct",
        tally.total(),
        tally.correct()
    );

    Ok(Report::new(&tally))
}
