/*! Bulk accuracy testing for Hunspell-style spell-checkers.

Checks every line of a word list against an affix file and one or more
dictionaries. Per-word results go to stdout, the accuracy report to stderr.

# Usage examples

```console
$ bulkcheck en_US.aff en_US.dic words.txt > results.tsv
```
Extra dictionaries without an affix file of their own (medical terms,
personal word lists) go between the primary dictionary and the word list:
```console
$ bulkcheck en_US.aff en_US.dic medical.dic personal.dic words.txt
```
For automated testing in CI there is a --threshold parameter:
```console
$ bulkcheck --threshold 95 en_US.aff en_US.dic words.txt
```
*/

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use clap::error::ErrorKind;
use clap::Parser;

use bulkcheck::engine::{HunspellEngine, SpellEngine};
use bulkcheck::writer::{JsonWriter, RecordWriter, TsvWriter};
use bulkcheck::{evaluator, RunConfig, Sources};

#[derive(Debug, Parser)]
#[command(
    name = "bulkcheck",
    version,
    about = "Accuracy testing of a spell-checker over a word list."
)]
struct Args {
    /// Provide JSON config file to override run defaults
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write per-word results to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write per-word results as JSON lines
    #[arg(long)]
    json: bool,

    /// The file path for the JSON report output
    #[arg(long = "json-report")]
    json_report: Option<PathBuf>,

    /// Truncate word list to max number of words specified
    #[arg(short = 'w', long = "max-words")]
    max_words: Option<usize>,

    /// Minimum percentage of correct words for automated testing
    #[arg(short = 'T', long)]
    threshold: Option<f64>,

    /// Do not ask for suggestions for misspelled words
    #[arg(long = "no-suggest")]
    no_suggest: bool,

    /// The Hunspell affix file
    affix: PathBuf,

    /// One or more dictionaries followed by the file of words to check
    #[arg(required = true, num_args = 2.., value_name = "FILES")]
    files: Vec<PathBuf>,
}

impl Args {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_path(path)?,
            None => RunConfig::default(),
        };

        if self.max_words.is_some() {
            config.max_words = self.max_words;
        }
        if self.threshold.is_some() {
            config.threshold = self.threshold;
        }
        if self.no_suggest {
            config.suggest = false;
        }

        Ok(config)
    }
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = parse_args();
    let config = args.run_config()?;

    // clap has already checked that FILES holds at least two paths.
    let (dictionaries, words) = args.files.split_at(args.files.len() - 1);
    let words_path = &words[0];
    let primary = &dictionaries[0];

    let words = File::open(words_path).map_err(|source| bulkcheck::Error::InputUnavailable {
        path: words_path.clone(),
        source,
    })?;

    let mut engine =
        HunspellEngine::open(&args.affix, primary).map_err(bulkcheck::Error::Configuration)?;
    for path in &dictionaries[1..] {
        engine
            .add_dictionary(path)
            .map_err(bulkcheck::Error::Configuration)?;
    }
    log::info!(
        "Loaded '{}' with {} supplementary dictionaries",
        primary.display(),
        dictionaries.len() - 1
    );

    let out: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Could not create result file '{}'", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer: Box<dyn RecordWriter> = if args.json {
        Box::new(JsonWriter::new(out))
    } else {
        Box::new(TsvWriter::new(out))
    };

    let report = evaluator::run(&engine, BufReader::new(words), &mut *writer, &config)
        .with_context(|| format!("Failed to check words in '{}'", words_path.display()))?;

    let sources = Sources {
        affix: args.affix.display().to_string(),
        dictionary: primary.display().to_string(),
        wordlist: words_path.display().to_string(),
    };
    let summary = report.summary(&sources);
    eprint!("{}", summary);

    if let Some(path) = &args.json_report {
        let output = File::create(path)
            .with_context(|| format!("Could not create report file '{}'", path.display()))?;
        serde_json::to_writer_pretty(output, &summary)?;
    }

    if !config.passes(report.pct_correct) {
        bail!(
            "Percentage of correct words {:.2} is below threshold {:.2}",
            report.pct_correct,
            config.threshold.unwrap_or_default()
        );
    }

    Ok(())
}
