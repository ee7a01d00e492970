//! Crate-level tests for `fraction_quiz`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Arithmetic | Worked examples; commutativity and subtract/add inverse over catalog operands |
//! | Round payload | Option count, uniqueness, one correct option, display parts, unit, round number |
//! | Scoring | Full, zero and boundary scores map to the right tier and end event |
//! | Transitions | Out-of-sequence commands are rejected without side effects; restart |
//! | Setup validation | Undersized pools and bad configs fail at construction |
//! | Determinism | Same seed → identical event stream |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz_engine::{
    evaluate, format_display, solve, Catalog, DistractorPool, FractionValue, Operator,
    PerformanceTier, QuizConfig, QuizError, QuizSession, SessionPhase,
};
use crate::web_adapter::{EventLog, RenderEvent};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Built-in catalog and pool, seeded.
fn session(seed: u64) -> QuizSession<EventLog> {
    QuizSession::builtin(QuizConfig::seeded(seed), EventLog::new()).unwrap()
}

fn f(w: u32, n: u32, d: u32) -> FractionValue {
    FractionValue::new(w, n, d).unwrap()
}

/// Every operand that appears in the built-in catalog.
fn catalog_operands() -> Vec<FractionValue> {
    Catalog::builtin()
        .problems()
        .iter()
        .flat_map(|p| [p.operand_a, p.operand_b])
        .collect()
}

/// Any option value that is not the current answer.
fn wrong_value(s: &QuizSession<EventLog>) -> String {
    let correct = s.correct_value().unwrap();
    s.options()
        .iter()
        .find(|o| o.value != correct)
        .map(|o| o.value.clone())
        .unwrap()
}

/// Play a full session answering the first `right` rounds correctly, the rest wrong.
fn play(seed: u64, right: usize) -> QuizSession<EventLog> {
    let mut s = session(seed);
    s.start().unwrap();
    for round in 0..s.max_rounds() {
        let value = if round < right {
            s.correct_value().unwrap().to_string()
        } else {
            wrong_value(&s)
        };
        s.submit_answer(&value).unwrap();
        s.advance().unwrap();
    }
    s
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn worked_examples() {
    assert_eq!(evaluate(f(1, 1, 2), Operator::Add, f(0, 3, 4)), "2 1/4");
    assert_eq!(evaluate(f(5, 1, 3), Operator::Subtract, f(2, 1, 6)), "3 1/6");
}

#[test]
fn addition_is_commutative_over_catalog_operands() {
    let ops = catalog_operands();
    for a in &ops {
        for b in &ops {
            assert_eq!(
                evaluate(*a, Operator::Add, *b),
                evaluate(*b, Operator::Add, *a),
                "{a} + {b} is not commutative"
            );
        }
    }
}

#[test]
fn subtraction_then_addition_restores_operand() {
    let ops = catalog_operands();
    for a in &ops {
        for b in &ops {
            let diff = evaluate(*a, Operator::Subtract, *b);
            let back: FractionValue = diff.parse().unwrap();
            assert_eq!(
                evaluate(back, Operator::Add, *b),
                a.canonical(),
                "({a} - {b}) + {b} != {a}"
            );
        }
    }
}

// ── round payload ────────────────────────────────────────────────────────────

#[test]
fn start_renders_round_one_with_four_options() {
    for seed in SEEDS {
        let mut s = session(seed);
        s.start().unwrap();
        assert_eq!(s.phase(), SessionPhase::RoundActive);
        assert_eq!(s.round(), 1);

        let view = s.renderer().last_problem().unwrap().clone();
        assert_eq!(view.round, 1);
        assert_eq!(view.options.len(), 4, "seed={seed}");

        let mut values: Vec<&str> = view.options.iter().map(|o| o.value.as_str()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 4, "duplicate options for seed={seed}");

        let correct = s.correct_value().unwrap();
        let hits = view.options.iter().filter(|o| o.value == correct).count();
        assert_eq!(hits, 1, "seed={seed} must show the answer exactly once");

        for option in &view.options {
            assert_eq!(option.display, format_display(&option.value).unwrap());
        }

        let problem = &s.catalog().problems()[s.problem_index().unwrap()];
        assert_eq!(view.text, problem.text);
        assert_eq!(view.unit, problem.unit);
        assert_eq!(correct, solve(problem));
    }
}

#[test]
fn each_round_emits_problem_score_feedback_score() {
    let mut s = session(3);
    s.start().unwrap();
    let value = s.correct_value().unwrap().to_string();
    s.submit_answer(&value).unwrap();

    let events = s.renderer().events();
    assert!(matches!(events[0], RenderEvent::Problem(_)));
    assert_eq!(events[1], RenderEvent::Score { score: 0, round: 1 });
    assert_eq!(events[2], RenderEvent::Feedback { correct: true, correct_value: value });
    assert_eq!(events[3], RenderEvent::Score { score: 1, round: 1 });
}

#[test]
fn wrong_answer_reveals_correct_value() {
    let mut s = session(11);
    s.start().unwrap();
    let correct = s.correct_value().unwrap().to_string();
    let wrong = wrong_value(&s);
    assert!(!s.submit_answer(&wrong).unwrap());
    assert_eq!(s.score(), 0);
    let events = s.renderer_mut().drain();
    assert!(events.contains(&RenderEvent::Feedback { correct: false, correct_value: correct }));
}

#[test]
fn submit_option_answers_by_position() {
    let mut s = session(5);
    s.start().unwrap();
    let index = s
        .options()
        .iter()
        .position(|o| Some(o.value.as_str()) == s.correct_value())
        .unwrap();
    assert!(s.submit_option(index).unwrap());
    assert_eq!(s.score(), 1);
}

#[test]
fn submit_option_out_of_range_is_rejected() {
    let mut s = session(5);
    s.start().unwrap();
    let err = s.submit_option(4).unwrap_err();
    assert!(matches!(err, QuizError::OptionOutOfRange { index: 4, len: 4 }));
    assert_eq!(s.phase(), SessionPhase::RoundActive);
}

#[test]
fn problems_repeat_with_replacement() {
    let catalog = Catalog::from_json(
        r#"[{"text": "Only one.", "operand_a": "1/2", "operator": "add", "operand_b": "1/4", "unit": "cups"}]"#,
    )
    .unwrap();
    let config = QuizConfig { max_rounds: 5, ..QuizConfig::seeded(8) };
    let mut s = QuizSession::new(config, catalog, DistractorPool::builtin(), EventLog::new()).unwrap();
    s.start().unwrap();
    for _ in 0..5 {
        assert_eq!(s.correct_value(), Some("3/4"));
        s.submit_answer("3/4").unwrap();
        s.advance().unwrap();
    }
    assert_eq!(s.summary().unwrap().score, 5);
}

#[test]
fn selection_reaches_every_catalog_problem() {
    let mut seen = [false; 10];
    for seed in 0..20u64 {
        let mut s = session(seed);
        s.start().unwrap();
        while s.phase() != SessionPhase::Ended {
            seen[s.problem_index().unwrap()] = true;
            s.submit_answer("0").unwrap();
            s.advance().unwrap();
        }
    }
    assert!(seen.iter().all(|&x| x), "some problems never selected: {seen:?}");
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn perfect_session_reports_top_tier() {
    let s = play(42, 10);
    assert_eq!(s.phase(), SessionPhase::Ended);
    let summary = s.summary().unwrap();
    assert_eq!(summary.score, 10);
    assert_eq!(summary.tier, PerformanceTier::Excellent);
    assert_eq!(summary.percentage, 100.0);
    assert_eq!(
        s.renderer().events().last().unwrap(),
        &RenderEvent::End {
            score: 10,
            max_rounds: 10,
            message: PerformanceTier::Excellent.message().to_string(),
        }
    );
}

#[test]
fn tier_boundaries() {
    let cases = [
        (10, PerformanceTier::Excellent),
        (9, PerformanceTier::Excellent),
        (8, PerformanceTier::Great),
        (7, PerformanceTier::Great),
        (6, PerformanceTier::Good),
        (5, PerformanceTier::Good),
        (4, PerformanceTier::KeepPracticing),
        (0, PerformanceTier::KeepPracticing),
    ];
    for (right, tier) in cases {
        let s = play(17, right);
        let summary = s.summary().unwrap();
        assert_eq!(summary.score, right);
        assert_eq!(summary.tier, tier, "score {right}/10");
        assert_eq!(summary.message, tier.message());
    }
}

#[test]
fn end_event_is_emitted_once() {
    let s = play(2, 6);
    let ends = s
        .renderer()
        .events()
        .iter()
        .filter(|e| matches!(e, RenderEvent::End { .. }))
        .count();
    assert_eq!(ends, 1);
    assert_eq!(s.round(), 10);
    assert!(s.correct_value().is_none());
    assert!(s.options().is_empty());
}

// ── transitions ──────────────────────────────────────────────────────────────

#[test]
fn submit_before_start_is_rejected() {
    let mut s = session(1);
    let err = s.submit_answer("1/2").unwrap_err();
    assert!(err.is_transition());
    assert!(matches!(err, QuizError::InvalidTransition { phase: SessionPhase::NotStarted, .. }));
    assert!(s.renderer().events().is_empty());
}

#[test]
fn second_answer_in_a_round_is_ignored() {
    let mut s = session(1);
    s.start().unwrap();
    let value = s.correct_value().unwrap().to_string();
    s.submit_answer(&value).unwrap();
    let before = s.renderer().events().len();

    assert!(s.submit_answer(&value).unwrap_err().is_transition());
    assert_eq!(s.score(), 1);
    assert_eq!(s.renderer().events().len(), before);
}

#[test]
fn advance_requires_an_answer() {
    let mut s = session(1);
    assert!(s.advance().unwrap_err().is_transition());
    s.start().unwrap();
    assert!(s.advance().unwrap_err().is_transition());
    assert_eq!(s.round(), 1);
    assert_eq!(s.phase(), SessionPhase::RoundActive);
}

#[test]
fn start_twice_is_rejected() {
    let mut s = session(1);
    s.start().unwrap();
    assert!(s.start().unwrap_err().is_transition());
    assert_eq!(s.round(), 1);
}

#[test]
fn ended_session_rejects_play_commands() {
    let mut s = play(4, 3);
    assert!(s.submit_answer("1/2").unwrap_err().is_transition());
    assert!(s.advance().unwrap_err().is_transition());
    assert!(s.start().unwrap_err().is_transition());
    assert_eq!(s.summary().unwrap().score, 3);
}

#[test]
fn restart_resets_progress() {
    let mut s = play(4, 8);
    s.restart();
    assert_eq!(s.phase(), SessionPhase::NotStarted);
    assert_eq!((s.score(), s.round()), (0, 0));
    assert!(s.summary().is_none());

    s.start().unwrap();
    assert_eq!(s.round(), 1);
    assert_eq!(s.renderer().last_problem().unwrap().round, 1);
}

#[test]
fn restart_mid_round() {
    let mut s = session(9);
    s.start().unwrap();
    let value = s.correct_value().unwrap().to_string();
    s.submit_answer(&value).unwrap();
    s.restart();
    assert_eq!(s.score(), 0);
    assert!(s.correct_value().is_none());
    assert!(s.submit_answer(&value).unwrap_err().is_transition());
}

// ── setup validation ─────────────────────────────────────────────────────────

#[test]
fn undersized_pool_fails_at_construction() {
    // "1/4" is the answer to the sugar problem, leaving only two candidates.
    let pool = DistractorPool::new(["1/4", "1/3", "2/3"]).unwrap();
    let result = QuizSession::new(QuizConfig::seeded(1), Catalog::builtin(), pool, EventLog::new());
    assert!(matches!(result, Err(QuizError::DistractorPoolExhausted { required: 3, .. })));
}

#[test]
fn zero_round_config_fails_at_construction() {
    let config = QuizConfig { max_rounds: 0, ..QuizConfig::default() };
    assert!(matches!(
        QuizSession::builtin(config, EventLog::new()),
        Err(QuizError::InvalidConfig(_))
    ));
}

#[test]
fn distractor_count_controls_option_count() {
    let config = QuizConfig { distractor_count: 2, ..QuizConfig::seeded(6) };
    let mut s = QuizSession::builtin(config, EventLog::new()).unwrap();
    s.start().unwrap();
    assert_eq!(s.options().len(), 3);
}

#[test]
fn injected_rng_drives_the_session() {
    let make = || {
        let rng = StdRng::seed_from_u64(77);
        let mut s = QuizSession::with_rng(
            QuizConfig::default(),
            Catalog::builtin(),
            DistractorPool::builtin(),
            EventLog::new(),
            rng,
        )
        .unwrap();
        s.start().unwrap();
        s.renderer().last_problem().unwrap().clone()
    };
    assert_eq!(make(), make());
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_event_stream() {
    for seed in SEEDS {
        let a = play(seed, 5);
        let b = play(seed, 5);
        assert_eq!(a.renderer().to_json().unwrap(), b.renderer().to_json().unwrap(), "seed={seed}");
    }
}

#[test]
fn advance_delay_comes_from_config() {
    let config = QuizConfig { advance_delay_ms: 250, ..QuizConfig::seeded(1) };
    let s = QuizSession::builtin(config, EventLog::new()).unwrap();
    assert_eq!(s.advance_delay().as_millis(), 250);
}
