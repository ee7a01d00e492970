use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

/// Session tuning. Every field has a default, so `{}` is a valid JSON config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Rounds per session.
    pub max_rounds: usize,
    /// Wrong options shown next to the correct one.
    pub distractor_count: usize,
    /// How long the UI should wait after feedback before calling `advance()`.
    pub advance_delay_ms: u64,
    /// `Some` makes problem selection, distractors and shuffles reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            max_rounds: 10,
            distractor_count: 3,
            advance_delay_ms: 1800,
            rng_seed: None,
        }
    }
}

impl QuizConfig {
    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        QuizConfig { rng_seed: Some(seed), ..QuizConfig::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.max_rounds == 0 {
            return Err(QuizError::InvalidConfig("max_rounds must be at least 1".into()));
        }
        if self.distractor_count == 0 {
            return Err(QuizError::InvalidConfig("distractor_count must be at least 1".into()));
        }
        Ok(())
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}
