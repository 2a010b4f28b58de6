//! Threshold/margin decision function and the triage engine.
//!
//! [`decide`] turns one score map into the accept/priority decision.
//! The single-item path ([`Classifier::triage`]) and the batch runner
//! both call it, so the two code paths cannot diverge.

use tracing::debug;

use mdtriage_core::decision::{REASON_ACCEPTED, REASON_REJECTED};
use mdtriage_core::{Decision, LabelGroup, ScoreMap, TriageConfig, TriageError};

use crate::prefilter;
use crate::scorer::Scorer;

/// Weight of the property-group evidence in the composite priority score.
const PRIORITY_PROP_WEIGHT: f32 = 0.7;
/// Weight of the positive-group evidence in the composite priority score.
const PRIORITY_POS_WEIGHT: f32 = 0.3;
/// Flat boost when the text itself mentions a property term. Applies to
/// the priority score only, never to the accept test.
const PROPERTY_KEYWORD_BOOST: f32 = 0.05;
/// Number of diagnostic top labels carried on each decision.
const TOP_LABELS: usize = 6;

/// Combine per-group score maxima and the property-keyword boost into
/// one decision.
///
/// `accept` requires the positive score to clear `accept_threshold`
/// AND to lead the strongest negative score by `accept_margin`; an
/// absolute test alone misfires when a zero-shot model scores every
/// label high. `priority` tests the property-weighted composite
/// against `priority_threshold`, with its margin taken against the
/// negative group rather than the positive one, so an accepted paper
/// can still come out non-priority. The two flags are computed
/// independently.
///
/// Texts that fail the lexical gate short-circuit to the rejected
/// record no matter what the score map says: acceptance is never
/// claimed for text the gate rejects.
pub fn decide(scores: &ScoreMap, text: &str, config: &TriageConfig) -> Decision {
    if !prefilter::passes(text) {
        return Decision::prefilter_rejected();
    }

    let score_pos = scores.group_max(LabelGroup::Positive);
    let score_neg = scores.group_max(LabelGroup::Negative);
    let score_prop = scores.group_max(LabelGroup::Property);

    let prop_keywords = prefilter::has_property_keywords(text);
    let kw_boost = if prop_keywords {
        PROPERTY_KEYWORD_BOOST
    } else {
        0.0
    };
    let priority_score =
        PRIORITY_PROP_WEIGHT * score_prop + PRIORITY_POS_WEIGHT * score_pos + kw_boost;

    let accept =
        score_pos >= config.accept_threshold && score_pos - score_neg >= config.accept_margin;
    let priority = priority_score >= config.priority_threshold
        && score_prop - score_neg >= config.priority_margin;

    debug!(
        score_pos,
        score_neg, score_prop, priority_score, accept, priority, "decision"
    );

    Decision {
        accept,
        priority,
        reason: if accept { REASON_ACCEPTED } else { REASON_REJECTED }.to_string(),
        score_pos,
        score_neg,
        score_prop,
        priority_score,
        prop_keywords,
        top: scores
            .top(TOP_LABELS)
            .into_iter()
            .map(|(label, score)| (label.to_string(), score))
            .collect(),
    }
}

/// Triage engine: lexical gate in front of a scorer, decisions out.
///
/// Holds no mutable state besides the scorer itself; `decide` is a
/// pure function of its inputs, so independent engines with different
/// configurations can run concurrently.
pub struct Classifier<S: Scorer> {
    pub(crate) scorer: S,
    pub(crate) config: TriageConfig,
}

impl<S: Scorer> Classifier<S> {
    /// Build an engine around a scorer. The configuration is validated
    /// here, once — invalid thresholds are fatal, not per-item.
    pub fn new(scorer: S, config: TriageConfig) -> Result<Self, TriageError> {
        config.validate()?;
        Ok(Self { scorer, config })
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Triage one abstract.
    ///
    /// Texts failing the lexical gate are rejected without consulting
    /// the scorer. A scorer failure surfaces as an error: "could not
    /// be evaluated" is never reported as a rejection.
    pub fn triage(&mut self, text: &str) -> Result<Decision, TriageError> {
        if !prefilter::passes(text) {
            return Ok(Decision::prefilter_rejected());
        }
        let scores = self.scorer.score_one(text)?;
        Ok(decide(&scores, text, &self.config))
    }
}
