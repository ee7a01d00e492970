//! Error types for the quiz engine.

use thiserror::Error;

use crate::quiz_engine::models::SessionPhase;

/// Everything that can go wrong in the quiz engine.
///
/// Only `InvalidTransition` is expected at runtime (UI mis-sequencing); the
/// rest are configuration faults surfaced while loading or validating data.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A command arrived in a phase that does not accept it.
    #[error("cannot {action} while session is {phase}")]
    InvalidTransition { action: &'static str, phase: SessionPhase },

    /// An option index outside the presented list.
    #[error("option {index} does not exist (round has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    /// A catalog entry failed to parse or produced an impossible problem.
    #[error("catalog entry {index} is malformed: {reason}")]
    MalformedCatalogEntry { index: usize, reason: String },

    /// A fraction string could not be parsed.
    #[error("malformed fraction: {0:?}")]
    MalformedFraction(String),

    /// The distractor pool cannot supply enough wrong answers.
    #[error("distractor pool has {available} candidates besides {correct:?}, need {required}")]
    DistractorPoolExhausted { correct: String, available: usize, required: usize },

    #[error("problem catalog is empty")]
    EmptyCatalog,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuizError {
    /// Returns `true` for errors caused by command sequencing rather than data.
    pub fn is_transition(&self) -> bool {
        matches!(self, QuizError::InvalidTransition { .. })
    }
}
