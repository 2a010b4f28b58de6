//! Triage pipeline: read abstract files, run the engine, write the
//! decisions CSV.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use mdtriage_ai::{Classifier, Scorer};
use tracing::warn;

#[derive(Default)]
pub struct TriageStats {
    pub total: usize,
    pub accepted: usize,
    pub priority: usize,
    pub failed: usize,
    pub elapsed_secs: f64,
}

/// Run the full pipeline: read `*.txt` → batch triage → write CSV.
///
/// CSV columns are `filename,accept,priority`, one row per input file
/// in filename order. Items whose scorer call failed keep empty flag
/// fields: indeterminate is not `false`.
pub fn run_triage<S: Scorer>(
    mut classifier: Classifier<S>,
    input_dir: &Path,
    output_csv: &Path,
) -> anyhow::Result<TriageStats> {
    let start = Instant::now();

    let items = read_abstracts(input_dir)?;
    anyhow::ensure!(
        !items.is_empty(),
        "no .txt files found in {}",
        input_dir.display()
    );
    eprintln!("  Read {} abstracts from {}", items.len(), input_dir.display());

    let rows = classifier.triage_batch(&items);

    let mut writer = csv::Writer::from_path(output_csv)
        .with_context(|| format!("creating {}", output_csv.display()))?;
    writer.write_record(["filename", "accept", "priority"])?;

    let mut stats = TriageStats {
        total: rows.len(),
        ..TriageStats::default()
    };

    for row in &rows {
        match &row.decision {
            Ok(decision) => {
                writer.write_record([
                    row.id.as_str(),
                    bool_field(decision.accept),
                    bool_field(decision.priority),
                ])?;
                if decision.accept {
                    stats.accepted += 1;
                }
                if decision.priority {
                    stats.priority += 1;
                }
            }
            Err(err) => {
                warn!(id = %row.id, %err, "abstract could not be evaluated");
                writer.write_record([row.id.as_str(), "", ""])?;
                stats.failed += 1;
            }
        }
    }
    writer.flush().context("flushing decisions CSV")?;

    stats.elapsed_secs = start.elapsed().as_secs_f64();
    Ok(stats)
}

fn bool_field(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Read all `*.txt` files in the directory, sorted by filename, as
/// `(filename, text)` pairs.
fn read_abstracts(dir: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            // Lossy decoding: a stray invalid byte in one abstract
            // must not abort the whole run.
            let bytes =
                fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let text = String::from_utf8_lossy(&bytes);
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            Ok((name, text.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtriage_core::{LabelGroup, ScoreMap, TriageConfig, TriageError, labels};

    /// Scorer double: strong positive evidence for every scored text,
    /// optionally failing outright.
    struct StubScorer {
        fail: bool,
    }

    impl Scorer for StubScorer {
        fn score(&mut self, texts: &[&str]) -> Result<Vec<ScoreMap>, TriageError> {
            if self.fail {
                return Err(TriageError::ScorerUnavailable("stub outage".into()));
            }
            let mut scores = vec![0.05; labels::label_count()];
            scores[LabelGroup::Positive.range()].fill(0.9);
            let map = ScoreMap::new(scores).unwrap();
            Ok(vec![map; texts.len()])
        }
    }

    fn write_abstract(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    const PASSING: &str = "Molecular dynamics simulations of polymer melts with LAMMPS.";
    const FAILING: &str = "Synthesis and DSC characterization of a new polyester.";

    #[test]
    fn writes_one_row_per_file_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_abstract(dir.path(), "b.txt", FAILING);
        write_abstract(dir.path(), "a.txt", PASSING);
        write_abstract(dir.path(), "notes.md", "ignored");
        let out = dir.path().join("decisions.csv");

        let classifier =
            Classifier::new(StubScorer { fail: false }, TriageConfig::default()).unwrap();
        let stats = run_triage(classifier, dir.path(), &out).unwrap();

        assert_eq!(stats.total, 2);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.failed, 0);

        let csv = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "filename,accept,priority");
        assert_eq!(lines[1], "a.txt,true,false");
        assert_eq!(lines[2], "b.txt,false,false");
    }

    #[test]
    fn failed_items_get_empty_flags() {
        let dir = tempfile::tempdir().unwrap();
        write_abstract(dir.path(), "a.txt", PASSING);
        write_abstract(dir.path(), "b.txt", FAILING);
        let out = dir.path().join("decisions.csv");

        let classifier =
            Classifier::new(StubScorer { fail: true }, TriageConfig::default()).unwrap();
        let stats = run_triage(classifier, dir.path(), &out).unwrap();

        assert_eq!(stats.failed, 1);
        let csv = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        // a.txt reached the scorer and failed; b.txt was a normal
        // prefilter rejection and still gets real flags.
        assert_eq!(lines[1], "a.txt,,");
        assert_eq!(lines[2], "b.txt,false,false");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = PASSING.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        fs::write(dir.path().join("a.txt"), bytes).unwrap();
        let out = dir.path().join("decisions.csv");

        let classifier =
            Classifier::new(StubScorer { fail: false }, TriageConfig::default()).unwrap();
        let stats = run_triage(classifier, dir.path(), &out).unwrap();

        assert_eq!(stats.total, 1);
        assert_eq!(stats.failed, 0);
        let csv = fs::read_to_string(&out).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("a.txt,true"));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("decisions.csv");
        let classifier =
            Classifier::new(StubScorer { fail: false }, TriageConfig::default()).unwrap();
        assert!(run_triage(classifier, dir.path(), &out).is_err());
    }
}
