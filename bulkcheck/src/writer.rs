//! Writers for the per-word result channel.
use std::io::{self, Write};

use serde::Serialize;

use crate::evaluator::WordRecord;

/// Receives every checked word as soon as it has been checked. Writers flush
/// after each record, so a reader following the output sees every word as
/// soon as it is written.
pub trait RecordWriter {
    /// Write the result for one word.
    fn write_record(&mut self, record: &WordRecord) -> io::Result<()>;

    /// Called once after the last word.
    fn finish(&mut self) -> io::Result<()>;
}

/// Tab-separated results: `1|0`, the word, and its suggestions joined by
/// `;` (empty for correct words).
pub struct TsvWriter<W: Write> {
    out: W,
}

impl<W: Write> TsvWriter<W> {
    /// Write results to `out`.
    pub fn new(out: W) -> TsvWriter<W> {
        TsvWriter { out }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordWriter for TsvWriter<W> {
    fn write_record(&mut self, record: &WordRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}",
            u8::from(record.is_correct),
            record.text,
            record.suggestions.join(";")
        )?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    word: &'a str,
    is_correct: bool,
    has_space: bool,
    suggestions: &'a [String],
}

/// One JSON object per line, so results still stream.
pub struct JsonWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonWriter<W> {
    /// Write results to `out`.
    pub fn new(out: W) -> JsonWriter<W> {
        JsonWriter { out }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &WordRecord) -> io::Result<()> {
        let json = JsonRecord {
            word: &record.text,
            is_correct: record.is_correct,
            has_space: record.has_space,
            suggestions: &record.suggestions,
        };
        serde_json::to_writer(&mut self.out, &json)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
