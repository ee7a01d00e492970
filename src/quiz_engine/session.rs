//! Round/session state machine.
//!
//! ```text
//! NotStarted --start--> RoundActive --submit--> RoundAnswered --advance--> RoundActive
//!                                                             \-advance--> Ended (last round)
//! any phase --restart--> NotStarted
//! ```
//!
//! All transitions are synchronous. A command issued in the wrong phase is
//! rejected with `InvalidTransition` and leaves the session untouched. The
//! session owns no timers: after feedback the UI waits
//! [`advance_delay`](QuizSession::advance_delay) and then calls `advance()`.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::quiz_engine::{
    arithmetic::solve,
    catalog::Catalog,
    config::QuizConfig,
    distractors::{generate_distractors, DistractorPool},
    error::QuizError,
    helpers::build_options,
    models::{ProblemView, QuizOption, SessionPhase, SessionSummary},
};

/// The UI collaborator. The session calls these; the host decides how to draw.
pub trait QuizRenderer {
    fn render_problem(&mut self, problem: &ProblemView);
    fn render_feedback(&mut self, correct: bool, correct_value: &str);
    fn render_score(&mut self, score: usize, round: usize);
    fn render_end(&mut self, score: usize, max_rounds: usize, message: &str);
}

#[derive(Debug, Clone)]
struct ActiveRound {
    problem_index: usize,
    correct: String,
    options: Vec<QuizOption>,
}

pub struct QuizSession<U, R = StdRng> {
    config: QuizConfig,
    catalog: Catalog,
    pool: DistractorPool,
    rng: R,
    renderer: U,
    phase: SessionPhase,
    round: usize,
    score: usize,
    active: Option<ActiveRound>,
    summary: Option<SessionSummary>,
}

impl<U: QuizRenderer> QuizSession<U, StdRng> {
    /// Session seeded from `config.rng_seed`, or from entropy when unset.
    pub fn new(
        config: QuizConfig,
        catalog: Catalog,
        pool: DistractorPool,
        renderer: U,
    ) -> Result<Self, QuizError> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(config, catalog, pool, renderer, rng)
    }

    /// Built-in catalog and distractor pool.
    pub fn builtin(config: QuizConfig, renderer: U) -> Result<Self, QuizError> {
        Self::new(config, Catalog::builtin(), DistractorPool::builtin(), renderer)
    }
}

impl<U: QuizRenderer, R: Rng> QuizSession<U, R> {
    /// Validate the setup and build a session around an injected random source.
    ///
    /// Every catalog answer must leave at least `distractor_count` pool entries
    /// to choose from; otherwise this fails with `DistractorPoolExhausted`.
    pub fn with_rng(
        config: QuizConfig,
        catalog: Catalog,
        pool: DistractorPool,
        renderer: U,
        rng: R,
    ) -> Result<Self, QuizError> {
        config.validate()?;
        for problem in catalog.problems() {
            pool.ensure_supports(&solve(problem), config.distractor_count)?;
        }
        Ok(QuizSession {
            config,
            catalog,
            pool,
            rng,
            renderer,
            phase: SessionPhase::NotStarted,
            round: 0,
            score: 0,
            active: None,
            summary: None,
        })
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        self.require("start", SessionPhase::NotStarted)?;
        info!(max_rounds = self.config.max_rounds, "quiz session started");
        self.load_round()
    }

    /// Answer with a canonical value string. Returns whether it was correct.
    pub fn submit_answer(&mut self, value: &str) -> Result<bool, QuizError> {
        self.require("submit an answer", SessionPhase::RoundActive)?;
        let Some(active) = self.active.as_ref() else {
            return Err(self.reject("submit an answer"));
        };

        let correct = value == active.correct;
        if correct {
            self.score += 1;
        }
        self.phase = SessionPhase::RoundAnswered;
        debug!(round = self.round, value, expected = %active.correct, correct, "answer submitted");

        self.renderer.render_feedback(correct, &active.correct);
        self.renderer.render_score(self.score, self.round);
        Ok(correct)
    }

    /// Answer by position in the presented option list.
    pub fn submit_option(&mut self, index: usize) -> Result<bool, QuizError> {
        self.require("submit an answer", SessionPhase::RoundActive)?;
        let options = self.options();
        let value = options
            .get(index)
            .map(|o| o.value.clone())
            .ok_or(QuizError::OptionOutOfRange { index, len: options.len() })?;
        self.submit_answer(&value)
    }

    /// Move on after feedback: the next round, or the end screen after the last one.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        self.require("advance", SessionPhase::RoundAnswered)?;
        self.load_round()
    }

    /// Drop all progress and return to `NotStarted`. Accepted in every phase.
    pub fn restart(&mut self) {
        info!(score = self.score, round = self.round, "quiz session restarted");
        self.phase = SessionPhase::NotStarted;
        self.round = 0;
        self.score = 0;
        self.active = None;
        self.summary = None;
    }

    fn load_round(&mut self) -> Result<(), QuizError> {
        if self.round >= self.config.max_rounds {
            self.finish();
            return Ok(());
        }

        // Uniform pick with replacement; repeats within a session are allowed.
        let problem_index = self.rng.gen_range(0..self.catalog.len());
        let problem = &self.catalog.problems()[problem_index];
        let correct = solve(problem);
        let distractors = generate_distractors(
            &mut self.rng,
            &correct,
            &self.pool,
            self.config.distractor_count,
        )?;
        let options = build_options(&mut self.rng, &correct, &distractors)?;

        self.round += 1;
        debug!(round = self.round, problem_index, %correct, "round loaded");

        let view = ProblemView {
            text: problem.text.clone(),
            options: options.clone(),
            round: self.round,
            unit: problem.unit.clone(),
        };
        self.active = Some(ActiveRound { problem_index, correct, options });
        self.phase = SessionPhase::RoundActive;

        self.renderer.render_problem(&view);
        self.renderer.render_score(self.score, self.round);
        Ok(())
    }

    fn finish(&mut self) {
        let summary = SessionSummary::new(self.score, self.config.max_rounds);
        info!(
            score = summary.score,
            max_rounds = summary.max_rounds,
            percentage = summary.percentage,
            tier = ?summary.tier,
            "quiz session ended"
        );
        self.phase = SessionPhase::Ended;
        self.active = None;
        self.renderer.render_end(summary.score, summary.max_rounds, &summary.message);
        self.summary = Some(summary);
    }

    fn require(&self, action: &'static str, phase: SessionPhase) -> Result<(), QuizError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    fn reject(&self, action: &'static str) -> QuizError {
        warn!(action, phase = %self.phase, "rejected out-of-sequence command");
        QuizError::InvalidTransition { action, phase: self.phase }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn max_rounds(&self) -> usize {
        self.config.max_rounds
    }

    /// Canonical answer of the current round, while one is loaded.
    pub fn correct_value(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.correct.as_str())
    }

    /// Catalog index of the current round's problem.
    pub fn problem_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.problem_index)
    }

    /// Options of the current round in presentation order.
    pub fn options(&self) -> &[QuizOption] {
        self.active.as_ref().map(|a| a.options.as_slice()).unwrap_or(&[])
    }

    /// Final result, once the session has ended.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn advance_delay(&self) -> Duration {
        self.config.advance_delay()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &U {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut U {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> U {
        self.renderer
    }
}
