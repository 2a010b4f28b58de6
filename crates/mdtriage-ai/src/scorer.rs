//! Scorer boundary: the sole point where an external model is consulted.

use mdtriage_core::{ScoreMap, TriageError};

/// Hypothesis template for zero-shot classification. Fixed for a whole
/// run so batched and single calls are prompted identically.
pub const HYPOTHESIS_TEMPLATE: &str = "This abstract is about {}.";

/// Render the hypothesis sentence for one candidate label.
pub fn hypothesis_for(label: &str) -> String {
    HYPOTHESIS_TEMPLATE.replace("{}", label)
}

/// Multi-label zero-shot scoring capability.
///
/// Implementations return one [`ScoreMap`] per input text, in input
/// order, with an independent probability per label (multi-label, not
/// mutually exclusive). Batching must not alter per-item outputs:
/// scoring a text alone or inside a batch yields the same scores.
/// The implementation is swappable — local ONNX model, remote API,
/// cached lookup, or a test double.
pub trait Scorer {
    fn score(&mut self, texts: &[&str]) -> Result<Vec<ScoreMap>, TriageError>;

    /// Single-text convenience call.
    fn score_one(&mut self, text: &str) -> Result<ScoreMap, TriageError> {
        let maps = self.score(&[text])?;
        let got = maps.len();
        maps.into_iter()
            .next()
            .filter(|_| got == 1)
            .ok_or(TriageError::ScoreCountMismatch { expected: 1, got })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtriage_core::labels;

    #[test]
    fn hypothesis_renders_label() {
        assert_eq!(
            hypothesis_for("polymer melt or solution MD"),
            "This abstract is about polymer melt or solution MD."
        );
    }

    /// Scorer that returns a fixed number of flat maps per call.
    struct FixedScorer {
        maps_per_call: usize,
    }

    impl Scorer for FixedScorer {
        fn score(&mut self, _texts: &[&str]) -> Result<Vec<ScoreMap>, TriageError> {
            (0..self.maps_per_call)
                .map(|_| ScoreMap::new(vec![0.5; labels::label_count()]))
                .collect()
        }
    }

    #[test]
    fn score_one_unwraps_single_map() {
        let mut scorer = FixedScorer { maps_per_call: 1 };
        let map = scorer.score_one("text").unwrap();
        assert_eq!(map.group_max(labels::LabelGroup::Positive), 0.5);
    }

    #[test]
    fn score_one_rejects_miscounted_response() {
        let mut scorer = FixedScorer { maps_per_call: 2 };
        let err = scorer.score_one("text").unwrap_err();
        assert_eq!(
            err,
            TriageError::ScoreCountMismatch {
                expected: 1,
                got: 2
            }
        );

        let mut empty = FixedScorer { maps_per_call: 0 };
        let err = empty.score_one("text").unwrap_err();
        assert_eq!(
            err,
            TriageError::ScoreCountMismatch {
                expected: 1,
                got: 0
            }
        );
    }
}
