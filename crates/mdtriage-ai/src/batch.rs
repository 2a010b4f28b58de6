//! Batch runner: prefilter everything cheaply, score the survivors in
//! fixed-size chunks, decide with the same function as the single path.

use tracing::warn;

use mdtriage_core::{Decision, TriageError};

use crate::classifier::{Classifier, decide};
use crate::prefilter;
use crate::scorer::Scorer;

/// One output row per input item, in input order.
#[derive(Debug, Clone)]
pub struct TriageRow {
    /// Caller-supplied identifier (filename, DOI, ...), round-tripped
    /// unchanged.
    pub id: String,
    /// The decision, or the scorer failure that kept this item from
    /// being evaluated. A failure is never folded into `accept=false`.
    pub decision: Result<Decision, TriageError>,
}

impl<S: Scorer> Classifier<S> {
    /// Triage many `(id, text)` items.
    ///
    /// The prefilter runs over every item first, with no model calls.
    /// Survivors keep their original positions and are grouped into
    /// chunks of at most `config.batch_size`, one scorer call per
    /// chunk; each scored item goes through the same [`decide`] as the
    /// single-item path. A failing chunk marks only its own items as
    /// failed and the rest of the batch continues. Output order
    /// matches input order exactly, prefilter rejects included.
    pub fn triage_batch(&mut self, items: &[(String, String)]) -> Vec<TriageRow> {
        let mut decisions: Vec<Option<Result<Decision, TriageError>>> = vec![None; items.len()];

        let mut survivors = Vec::new();
        for (i, (_, text)) in items.iter().enumerate() {
            if prefilter::passes(text) {
                survivors.push(i);
            } else {
                decisions[i] = Some(Ok(Decision::prefilter_rejected()));
            }
        }

        for chunk in survivors.chunks(self.config.batch_size) {
            let texts: Vec<&str> = chunk.iter().map(|&i| items[i].1.as_str()).collect();
            match self.scorer.score(&texts) {
                Ok(maps) if maps.len() == texts.len() => {
                    for (&i, map) in chunk.iter().zip(&maps) {
                        decisions[i] = Some(Ok(decide(map, &items[i].1, &self.config)));
                    }
                }
                Ok(maps) => {
                    let err = TriageError::ScoreCountMismatch {
                        expected: texts.len(),
                        got: maps.len(),
                    };
                    warn!(%err, "scorer returned a misaligned batch");
                    for &i in chunk {
                        decisions[i] = Some(Err(err.clone()));
                    }
                }
                Err(err) => {
                    warn!(%err, items = chunk.len(), "scorer call failed, marking chunk indeterminate");
                    for &i in chunk {
                        decisions[i] = Some(Err(err.clone()));
                    }
                }
            }
        }

        items
            .iter()
            .zip(decisions)
            .map(|((id, _), decision)| TriageRow {
                id: id.clone(),
                decision: decision.expect("every item is either rejected or chunked"),
            })
            .collect()
    }
}
