use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::quiz_engine::{error::QuizError, models::ProblemView, session::QuizRenderer};

/// One render call, in the shape a browser host consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderEvent {
    Problem(ProblemView),
    Feedback { correct: bool, correct_value: String },
    Score { score: usize, round: usize },
    End { score: usize, max_rounds: usize, message: String },
}

/// A [`QuizRenderer`] that records every call in order.
///
/// A web host drains it after each command and forwards the JSON to the page.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RenderEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Hand over everything recorded so far and start empty.
    pub fn drain(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn last_problem(&self) -> Option<&ProblemView> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Problem(view) => Some(view),
            _ => None,
        })
    }

    /// Every recorded event as a JSON array.
    pub fn to_json(&self) -> Result<Value, QuizError> {
        Ok(serde_json::to_value(&self.events)?)
    }
}

impl QuizRenderer for EventLog {
    fn render_problem(&mut self, problem: &ProblemView) {
        self.events.push(RenderEvent::Problem(problem.clone()));
    }

    fn render_feedback(&mut self, correct: bool, correct_value: &str) {
        self.events.push(RenderEvent::Feedback { correct, correct_value: correct_value.to_string() });
    }

    fn render_score(&mut self, score: usize, round: usize) {
        self.events.push(RenderEvent::Score { score, round });
    }

    fn render_end(&mut self, score: usize, max_rounds: usize, message: &str) {
        self.events.push(RenderEvent::End { score, max_rounds, message: message.to_string() });
    }
}
