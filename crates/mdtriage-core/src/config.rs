//! Engine configuration: thresholds, margins, and batch capacity.

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

pub const DEFAULT_ACCEPT_THRESHOLD: f32 = 0.70;
pub const DEFAULT_ACCEPT_MARGIN: f32 = 0.15;
pub const DEFAULT_PRIORITY_THRESHOLD: f32 = 0.65;
pub const DEFAULT_PRIORITY_MARGIN: f32 = 0.10;
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Threshold/margin tuning for the decision function, plus the scorer
/// batch capacity.
///
/// Always passed explicitly into the engine — never read from global
/// state — so concurrent callers can tune independently and the batched
/// and single-item paths cannot diverge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Minimum positive-group score to accept.
    pub accept_threshold: f32,
    /// Minimum lead of the positive score over the strongest negative score.
    pub accept_margin: f32,
    /// Minimum composite priority score.
    pub priority_threshold: f32,
    /// Minimum lead of the property score over the strongest negative score.
    pub priority_margin: f32,
    /// Maximum number of texts per scorer invocation.
    pub batch_size: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            accept_margin: DEFAULT_ACCEPT_MARGIN,
            priority_threshold: DEFAULT_PRIORITY_THRESHOLD,
            priority_margin: DEFAULT_PRIORITY_MARGIN,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl TriageConfig {
    /// Validate thresholds and margins, once, at engine construction.
    ///
    /// Scores are probabilities in [0, 1], so any threshold or margin
    /// outside that range makes its test unsatisfiable (or vacuous).
    pub fn validate(&self) -> Result<(), TriageError> {
        let params = [
            ("accept_threshold", self.accept_threshold),
            ("accept_margin", self.accept_margin),
            ("priority_threshold", self.priority_threshold),
            ("priority_margin", self.priority_margin),
        ];
        for (name, value) in params {
            if !(0.0..=1.0).contains(&value) {
                return Err(TriageError::Config(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.batch_size == 0 {
            return Err(TriageError::Config("batch_size must be at least 1".into()));
        }
        Ok(())
    }
}
