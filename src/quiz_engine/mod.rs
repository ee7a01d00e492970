//! Core quiz engine — fraction arithmetic, distractors, and the session state machine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: fractions, problems, options, render payloads, summaries |
//! | `fraction`    | `gcd`, `simplify`, `format_display` and `FractionValue` parsing |
//! | `arithmetic`  | Exact add/subtract over a common denominator |
//! | `distractors` | Wrong-answer pool and rejection-sampled draws |
//! | `catalog`     | Built-in and JSON-loaded word problems, validated at load |
//! | `helpers`     | Option building and Fisher-Yates shuffle |
//! | `config`      | `QuizConfig` (rounds, distractor count, advance delay, seed) |
//! | `session`     | `QuizSession` state machine and the `QuizRenderer` trait |
//! | `error`       | `QuizError` |

pub mod arithmetic;
pub mod catalog;
pub mod config;
pub mod distractors;
pub mod error;
pub mod fraction;
pub mod helpers;
pub mod models;
pub mod session;

pub use arithmetic::{evaluate, solve};
pub use catalog::{Catalog, CatalogEntry};
pub use config::QuizConfig;
pub use distractors::{generate_distractors, DistractorPool};
pub use error::QuizError;
pub use fraction::{format_display, gcd, simplify};
pub use models::{
    FractionValue, Operator, PerformanceTier, ProblemTemplate, ProblemView, QuizOption,
    SessionPhase, SessionSummary, StructuredFraction,
};
pub use session::{QuizRenderer, QuizSession};
