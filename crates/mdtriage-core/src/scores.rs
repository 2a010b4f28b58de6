//! Per-label score maps, one per scorer invocation per text.

use std::cmp::Ordering;

use crate::error::TriageError;
use crate::labels::{self, LabelGroup};

/// Scores in [0, 1] for every label in the taxonomy, stored in full
/// label-sequence order.
///
/// Multi-label: each entry is an independent probability, so a map does
/// not sum to 1 across labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMap {
    scores: Vec<f32>,
}

impl ScoreMap {
    /// Build from scores aligned with [`labels::all_labels`] order.
    ///
    /// Rejects maps with the wrong entry count or any score outside
    /// [0, 1] — a malformed scorer response must surface as an error,
    /// never be silently patched up.
    pub fn new(scores: Vec<f32>) -> Result<Self, TriageError> {
        let expected = labels::label_count();
        if scores.len() != expected {
            return Err(TriageError::LabelCountMismatch {
                expected,
                got: scores.len(),
            });
        }
        for (i, &s) in scores.iter().enumerate() {
            if !(0.0..=1.0).contains(&s) {
                return Err(TriageError::ScoreOutOfRange {
                    label: labels::all_labels()[i].to_string(),
                    value: s,
                });
            }
        }
        Ok(Self { scores })
    }

    /// Score for one label, if it is in the taxonomy.
    pub fn get(&self, label: &str) -> Option<f32> {
        labels::all_labels()
            .iter()
            .position(|&l| l == label)
            .map(|i| self.scores[i])
    }

    /// Maximum score across one label group.
    pub fn group_max(&self, group: LabelGroup) -> f32 {
        self.scores[group.range()]
            .iter()
            .copied()
            .fold(0.0, f32::max)
    }

    /// The `n` highest-scoring labels, descending.
    ///
    /// The sort is stable, so ties keep the original label order.
    pub fn top(&self, n: usize) -> Vec<(&'static str, f32)> {
        let mut ranked: Vec<(usize, f32)> = self.scores.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
            .into_iter()
            .map(|(i, s)| (labels::all_labels()[i], s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Map with `value` at `index` and `base` everywhere else.
    fn spiked(index: usize, value: f32, base: f32) -> ScoreMap {
        let mut scores = vec![base; labels::label_count()];
        scores[index] = value;
        ScoreMap::new(scores).unwrap()
    }

    #[test]
    fn rejects_wrong_length() {
        let err = ScoreMap::new(vec![0.5; 3]).unwrap_err();
        assert!(matches!(err, TriageError::LabelCountMismatch { got: 3, .. }));
    }

    #[test]
    fn rejects_out_of_range_score() {
        let mut scores = vec![0.5; labels::label_count()];
        scores[4] = 1.5;
        let err = ScoreMap::new(scores).unwrap_err();
        assert!(matches!(err, TriageError::ScoreOutOfRange { .. }));
    }

    #[test]
    fn rejects_nan_score() {
        let mut scores = vec![0.5; labels::label_count()];
        scores[0] = f32::NAN;
        assert!(ScoreMap::new(scores).is_err());
    }

    #[test]
    fn get_by_label() {
        let map = spiked(0, 0.9, 0.1);
        assert_eq!(map.get(labels::POSITIVE_LABELS[0]), Some(0.9));
        assert_eq!(map.get(labels::NEGATIVE_LABELS[0]), Some(0.1));
        assert_eq!(map.get("not a label"), None);
    }

    #[test]
    fn group_max_picks_per_group() {
        let prop_start = LabelGroup::Property.range().start;
        let mut scores = vec![0.1; labels::label_count()];
        scores[2] = 0.8; // positive
        scores[prop_start + 1] = 0.6; // property
        let map = ScoreMap::new(scores).unwrap();

        assert_eq!(map.group_max(LabelGroup::Positive), 0.8);
        assert_eq!(map.group_max(LabelGroup::Property), 0.6);
        assert_eq!(map.group_max(LabelGroup::Negative), 0.1);
    }

    #[test]
    fn top_descending() {
        let neg_start = LabelGroup::Negative.range().start;
        let mut scores = vec![0.0; labels::label_count()];
        scores[1] = 0.9;
        scores[neg_start] = 0.7;
        scores[3] = 0.5;
        let map = ScoreMap::new(scores).unwrap();

        let top = map.top(3);
        assert_eq!(top[0], (labels::POSITIVE_LABELS[1], 0.9));
        assert_eq!(top[1], (labels::NEGATIVE_LABELS[0], 0.7));
        assert_eq!(top[2], (labels::POSITIVE_LABELS[3], 0.5));
    }

    #[test]
    fn top_ties_keep_label_order() {
        let map = ScoreMap::new(vec![0.5; labels::label_count()]).unwrap();
        let top = map.top(6);
        let expected: Vec<&str> = labels::all_labels()[..6].to_vec();
        let got: Vec<&str> = top.iter().map(|(l, _)| *l).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn top_clamped_to_label_count() {
        let map = ScoreMap::new(vec![0.5; labels::label_count()]).unwrap();
        assert_eq!(map.top(1000).len(), labels::label_count());
    }
}
