//! Classification decision engine for polymer-MD abstract triage:
//! lexical prefilter, zero-shot scorer boundary, threshold/margin
//! decision function, and batch runner.

mod batch;
mod classifier;
pub mod prefilter;
mod scorer;
#[cfg(feature = "onnx")]
mod zero_shot;

pub use batch::TriageRow;
pub use classifier::{Classifier, decide};
pub use scorer::{HYPOTHESIS_TEMPLATE, Scorer, hypothesis_for};
#[cfg(feature = "onnx")]
pub use zero_shot::ZeroShotScorer;
