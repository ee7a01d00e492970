//! Console playthrough of one quiz session.
//!
//! Run with: `cargo run --example demo`
//!
//! A `ConsoleRenderer` stands in for the browser UI: it prints every render
//! call. The "player" answers correctly on even rounds and picks the first
//! wrong option on odd ones, so the run shows both feedback paths and ends on
//! a middle-tier message.
//!
//! ## Key concepts demonstrated
//!
//! - `QuizConfig::seeded(seed)` makes problem choice, distractors and option
//!   order reproducible.
//! - The session only talks to the UI through `QuizRenderer`.
//! - `advance_delay()` is the pause a real UI would wait before `advance()`;
//!   the demo skips the wait.

use fraction_quiz::{
    evaluate, simplify, FractionValue, Operator, ProblemView, QuizConfig, QuizRenderer,
    QuizSession, StructuredFraction,
};

struct ConsoleRenderer;

fn show(display: &StructuredFraction) -> String {
    match *display {
        StructuredFraction::Whole { value } => value.to_string(),
        StructuredFraction::Proper { negative, numerator, denominator } =>
            format!("{}({numerator} over {denominator})", if negative { "-" } else { "" }),
        StructuredFraction::Mixed { negative, whole, numerator, denominator } =>
            format!("{}{whole} and ({numerator} over {denominator})", if negative { "-" } else { "" }),
    }
}

impl QuizRenderer for ConsoleRenderer {
    fn render_problem(&mut self, problem: &ProblemView) {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Problem {}", problem.round);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  {}", problem.text);
        println!();
        for (i, option) in problem.options.iter().enumerate() {
            println!("  [{}] {:<10} {}  {}", i + 1, option.value, show(&option.display), problem.unit);
        }
        println!();
    }

    fn render_feedback(&mut self, correct: bool, correct_value: &str) {
        if correct {
            println!("  ✓ Correct!");
        } else {
            println!("  ✗ Not quite. The answer is {correct_value}.");
        }
    }

    fn render_score(&mut self, score: usize, round: usize) {
        println!("  Score: {score}  Round: {round}");
    }

    fn render_end(&mut self, score: usize, max_rounds: usize, message: &str) {
        println!();
        println!("══ Finished: {score}/{max_rounds} ══");
        println!("  {message}");
    }
}

fn main() {
    // ── Arithmetic engine on its own ─────────────────────────────────────────
    println!();
    println!("══ Arithmetic ══");
    let a = FractionValue::new(1, 1, 2).expect("valid operand");
    let b = FractionValue::new(0, 3, 4).expect("valid operand");
    println!("  {a} + {b} = {}", evaluate(a, Operator::Add, b));
    println!("  simplify(-3, 4) = {}", simplify(-3, 4));
    println!();

    // ── One full session ─────────────────────────────────────────────────────
    let mut session = QuizSession::builtin(QuizConfig::seeded(2024), ConsoleRenderer)
        .expect("built-in catalog is valid");
    println!("(a real UI would wait {:?} before each advance)", session.advance_delay());
    println!();

    session.start().expect("fresh session starts");
    for round in 0..session.max_rounds() {
        let correct = session.correct_value().expect("round loaded").to_string();
        let pick = if round % 2 == 0 {
            correct
        } else {
            session
                .options()
                .iter()
                .find(|o| o.value != correct)
                .map(|o| o.value.clone())
                .expect("round has distractors")
        };
        println!("  > {pick}");
        session.submit_answer(&pick).expect("round is active");
        session.advance().expect("round is answered");
        println!();
    }
}
