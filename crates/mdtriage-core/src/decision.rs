//! Per-abstract triage decision record.

use serde::{Deserialize, Serialize};

/// Reason attached when the lexical prefilter rejects a text.
pub const REASON_PREFILTER: &str = "fails keyword prefilter";
/// Reason when the positive signal clears both threshold and margin.
pub const REASON_ACCEPTED: &str = "pos high & margin over neg";
/// Reason when it does not.
pub const REASON_REJECTED: &str = "pos low or margin small";

/// Outcome of triaging one abstract.
///
/// Constructed fresh per input text and immutable once returned.
/// Persistence is a downstream concern; the record carries the full
/// diagnostics so a consumer can audit why a flag was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Keep as a polymer MD paper.
    pub accept: bool,
    /// Prioritize for property extraction.
    pub priority: bool,
    pub reason: String,
    /// Maximum score across the Positive label group.
    pub score_pos: f32,
    /// Maximum score across the Negative label group.
    pub score_neg: f32,
    /// Maximum score across the Property label group.
    pub score_prop: f32,
    /// Property-weighted composite, including the keyword boost.
    pub priority_score: f32,
    /// Whether the text itself mentions a property term.
    pub prop_keywords: bool,
    /// Up to six highest-scoring labels, descending.
    pub top: Vec<(String, f32)>,
}

impl Decision {
    /// Short-circuit record for texts that fail the lexical gate.
    ///
    /// The scorer is never consulted for these: all scores are exactly
    /// zero and both flags are false, regardless of model behaviour.
    pub fn prefilter_rejected() -> Self {
        Self {
            accept: false,
            priority: false,
            reason: REASON_PREFILTER.to_string(),
            score_pos: 0.0,
            score_neg: 0.0,
            score_prop: 0.0,
            priority_score: 0.0,
            prop_keywords: false,
            top: Vec::new(),
        }
    }
}
