//! # fraction_quiz
//!
//! The engine behind a fraction word-problem quiz: exact mixed-number
//! arithmetic, plausible wrong answers, and the round/score state machine that
//! drives a session. Drawing, audio and timers belong to the host UI, which
//! plugs in through the [`QuizRenderer`] trait.
//!
//! ## How it works
//!
//! 1. Build a [`QuizSession`] from a [`QuizConfig`], a [`Catalog`] of word
//!    problems and a [`DistractorPool`]. Setup is validated up front: a pool
//!    too small for some answer is rejected here, not discovered mid-game.
//! 2. Call `start()`. Each round picks a problem at random (with
//!    replacement), computes the answer with [`evaluate`], draws distractors,
//!    shuffles four options and hands a [`ProblemView`] to the renderer.
//! 3. Feed clicks back with `submit_answer()` / `submit_option()`, then
//!    `advance()` after the UI's feedback delay. After the last round the
//!    renderer receives the score and a tiered message.
//!
//! Answers are compared by their canonical string (`"2 1/4"`, `"-3/4"`, `"10"`),
//! which [`simplify`] produces uniquely for every value.
//!
//! ## Quick start
//!
//! ```rust
//! use fraction_quiz::{EventLog, QuizConfig, QuizSession};
//!
//! let mut session = QuizSession::builtin(QuizConfig::seeded(42), EventLog::new()).unwrap();
//! session.start().unwrap();
//!
//! let answer = session.correct_value().unwrap().to_string();
//! assert!(session.submit_answer(&answer).unwrap());
//! session.advance().unwrap();
//! assert_eq!(session.round(), 2);
//! ```

pub mod quiz_engine;
pub mod web_adapter;

// Convenience re-exports so callers can use `fraction_quiz::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    evaluate, format_display, simplify, Catalog, DistractorPool, FractionValue, Operator,
    PerformanceTier, ProblemTemplate, ProblemView, QuizConfig, QuizError, QuizOption,
    QuizRenderer, QuizSession, SessionPhase, SessionSummary, StructuredFraction,
};
pub use web_adapter::{EventLog, RenderEvent};

#[cfg(test)]
mod tests;
