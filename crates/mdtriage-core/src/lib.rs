//! Core types for polymer-MD abstract triage: label taxonomy, score
//! maps, decision records, configuration, and the error taxonomy.

pub mod config;
pub mod decision;
pub mod error;
pub mod labels;
pub mod scores;

pub use config::TriageConfig;
pub use decision::Decision;
pub use error::TriageError;
pub use labels::LabelGroup;
pub use scores::ScoreMap;
