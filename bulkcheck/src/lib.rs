/*! Bulk accuracy evaluation for spell-checkers.

Runs a spell-checking engine over a list of words (one per line), classifies
every word as correct or incorrect, collects suggestions for the incorrect
ones and aggregates accuracy statistics, split by whether a word contains a
space.

# Usage examples

```no_run
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bulkcheck::engine::{HunspellEngine, SpellEngine};
use bulkcheck::writer::TsvWriter;
use bulkcheck::{evaluator, RunConfig};

let engine = HunspellEngine::open(Path::new("en_US.aff"), Path::new("en_US.dic"))?;
let words = BufReader::new(File::open("words.txt")?);
let mut writer = TsvWriter::new(std::io::stdout());

let report = evaluator::run(&engine, words, &mut writer, &RunConfig::default())?;
println!("{:.2}% correct", report.pct_correct);
# Ok::<(), Box<dyn std::error::Error>>(())
```

The command-line front end lives in the `bulkcheck-bin` crate.
*/

#![warn(missing_docs)]
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod report;
pub mod tally;
pub mod writer;

pub use config::RunConfig;
pub use error::Error;
pub use evaluator::{Evaluation, WordRecord};
pub use report::{Report, Sources};
pub use tally::Tally;
