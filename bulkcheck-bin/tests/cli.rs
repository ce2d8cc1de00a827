//! CLI integration tests using assert_cmd.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AFF: &str = "SET UTF-8\nTRY esianrtolcdugmphbyfvkwz\n";
const DIC: &str = "4\ncat\ndog\nhouse\nmouse\n";

fn bulkcheck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("bulkcheck").unwrap()
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Fixture {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("test.aff"), AFF).unwrap();
        fs::write(dir.path().join("test.dic"), DIC).unwrap();
        Fixture { dir }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[test]
fn checks_words() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\ndog\nzzzzqqq\n");

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1\tcat\t\n1\tdog\t\n0\tzzzzqqq\t"))
        .stderr(predicate::str::contains("number of words\t3\n"))
        .stderr(predicate::str::contains("number of correct words\t2\n"))
        .stderr(predicate::str::contains("number of incorrect words\t1\n"))
        .stderr(predicate::str::contains("percentage of correct words\t066.67\n"))
        .stderr(predicate::str::contains(
            "percentage of correct words with space\t100.00\n",
        ));
}

#[test]
fn report_order() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\n");

    let output = bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let labels = stderr
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "Hunspell affix",
            "Hunspell dict",
            "wordlist",
            "percentage of words without space",
            "percentage of words with space",
            "number of words",
            "number of correct words",
            "number of incorrect words",
            "percentage of correct words",
            "percentage of incorrect words",
            "number of words without space",
            "number of correct words without space",
            "number of incorrect words without space",
            "percentage of correct words without space",
            "percentage of incorrect words without space",
            "number of words with space",
            "number of correct words with space",
            "number of incorrect words with space",
            "percentage of correct words with space",
            "percentage of incorrect words with space",
        ]
    );
}

#[test]
fn counts_words_with_space() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\ndog house\n");

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success()
        .stderr(predicate::str::contains("number of words with space\t1\n"))
        .stderr(predicate::str::contains("number of words without space\t1\n"))
        .stderr(predicate::str::contains(
            "percentage of words with space\t050.00\n",
        ));
}

#[test]
fn supplementary_dictionaries() {
    let fixture = Fixture::new();
    let extra = fixture.file("extra.dic", "1\nzebra\n");
    let more = fixture.file("more.dic", "okapi\n");
    let words = fixture.file("words.txt", "zebra\nokapi\n");

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&extra)
        .arg(&more)
        .arg(&words)
        .assert()
        .success()
        .stdout("1\tzebra\t\n1\tokapi\t\n")
        .stderr(predicate::str::contains(format!(
            "Hunspell dict\t{}\n",
            fixture.path("test.dic").display()
        )));
}

#[test]
fn too_few_arguments() {
    let fixture = Fixture::new();

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .assert()
        .code(1);

    bulkcheck().assert().code(1);
}

#[test]
fn missing_word_list() {
    let fixture = Fixture::new();

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(fixture.path("nonexistent.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not open file of words to check"));
}

#[test]
fn empty_word_list() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "");

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No words to check"))
        .stderr(predicate::str::contains("number of words").not());
}

#[test]
fn missing_dictionary() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\n");

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("nonexistent.dic"))
        .arg(&words)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_affix_file() {
    let fixture = Fixture::new();
    let aff = fixture.file("bad.aff", "FLAG bogus\n");
    let words = fixture.file("words.txt", "cat\n");

    bulkcheck()
        .arg(&aff)
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load speller configuration"));
}

#[test]
fn missing_supplementary_dictionary() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\n");

    bulkcheck()
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(fixture.path("missing.dic"))
        .arg(&words)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("number of words").not());
}

#[test]
fn json_output() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\n");
    let report = fixture.path("report.json");

    bulkcheck()
        .arg("--json")
        .arg("--json-report")
        .arg(&report)
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""word":"cat""#))
        .stdout(predicate::str::contains(r#""is_correct":true"#));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["correct"], 1);
    assert_eq!(report["pct_correct"], 100.0);
}

#[test]
fn output_file() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\ndog\n");
    let results = fixture.path("results.tsv");

    bulkcheck()
        .arg("--output")
        .arg(&results)
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&results).unwrap(),
        "1\tcat\t\n1\tdog\t\n"
    );
}

#[test]
fn max_words() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\ndog\nhouse\n");

    bulkcheck()
        .args(["--max-words", "2"])
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success()
        .stdout("1\tcat\t\n1\tdog\t\n")
        .stderr(predicate::str::contains("number of words\t2\n"));
}

#[test]
fn threshold() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\nzzzzqqq\n");

    bulkcheck()
        .args(["--threshold", "50"])
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success();

    bulkcheck()
        .args(["--threshold", "75"])
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("percentage of correct words\t050.00"))
        .stderr(predicate::str::contains("below threshold"));
}

#[test]
fn config_file() {
    let fixture = Fixture::new();
    let words = fixture.file("words.txt", "cat\nzzzzqqq\nmouse\n");
    let config = fixture.file("config.json", r#"{ "suggest": false, "max_words": 2 }"#);

    bulkcheck()
        .arg("--config")
        .arg(&config)
        .arg(fixture.path("test.aff"))
        .arg(fixture.path("test.dic"))
        .arg(&words)
        .assert()
        .success()
        .stdout("1\tcat\t\n0\tzzzzqqq\t\n");
}
