use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fraction primitives
// ---------------------------------------------------------------------------

/// A signed rational number written in mixed-number form.
///
/// The sign lives in `negative`; `whole`, `numerator` and `denominator` are
/// magnitudes. Before normalization `numerator` may exceed `denominator`
/// (e.g. `1 5/4`). Values are never mutated: every operation returns a new one.
///
/// Outside the crate a value can only come from `new`, `FromStr` or serde
/// (which goes through `FromStr`), so the denominator is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FractionValue {
    pub(crate) negative: bool,
    pub(crate) whole: u32,
    pub(crate) numerator: u32,
    pub(crate) denominator: u32,
}

impl FractionValue {
    pub fn is_negative(self) -> bool {
        self.negative
    }

    pub fn whole(self) -> u32 {
        self.whole
    }

    pub fn numerator(self) -> u32 {
        self.numerator
    }

    pub fn denominator(self) -> u32 {
        self.denominator
    }
}

impl fmt::Display for FractionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match (self.whole, self.numerator) {
            (w, 0) => write!(f, "{sign}{w}"),
            (0, n) => write!(f, "{sign}{n}/{}", self.denominator),
            (w, n) => write!(f, "{sign}{w} {n}/{}", self.denominator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add      => "+",
            Operator::Subtract => "-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Presentation split of a canonical string, produced by
/// [`format_display`](crate::quiz_engine::fraction::format_display).
///
/// `Display` writes the canonical string back out unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuredFraction {
    /// A bare integer such as `"0"`, `"10"` or `"-2"`.
    Whole { value: i64 },
    /// A proper fraction such as `"3/4"`; rendered as a fraction token alone.
    Proper { negative: bool, numerator: u64, denominator: u64 },
    /// A mixed number such as `"2 1/4"`; rendered as a whole token plus a fraction token.
    Mixed { negative: bool, whole: u64, numerator: u64, denominator: u64 },
}

impl fmt::Display for StructuredFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |neg: bool| if neg { "-" } else { "" };
        match *self {
            StructuredFraction::Whole { value } => write!(f, "{value}"),
            StructuredFraction::Proper { negative, numerator, denominator } =>
                write!(f, "{}{numerator}/{denominator}", sign(negative)),
            StructuredFraction::Mixed { negative, whole, numerator, denominator } =>
                write!(f, "{}{whole} {numerator}/{denominator}", sign(negative)),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog types
// ---------------------------------------------------------------------------

/// One curated word problem: `operand_a <operator> operand_b`, measured in `unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemTemplate {
    pub text: String,
    pub operand_a: FractionValue,
    pub operator: Operator,
    pub operand_b: FractionValue,
    /// May be empty for unitless quantities ("of the tank").
    pub unit: String,
}

// ---------------------------------------------------------------------------
// Round / session types
// ---------------------------------------------------------------------------

/// A single answer choice handed to the UI.
///
/// Deliberately carries no correctness flag; the session alone knows the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub display: StructuredFraction,
    pub value: String,
}

/// Render payload for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemView {
    pub text: String,
    pub options: Vec<QuizOption>,
    pub round: usize,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    RoundActive,
    RoundAnswered,
    Ended,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::NotStarted    => "not started",
            SessionPhase::RoundActive   => "round active",
            SessionPhase::RoundAnswered => "round answered",
            SessionPhase::Ended         => "ended",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Excellent,
    Great,
    Good,
    KeepPracticing,
}

impl PerformanceTier {
    /// Tier for `score` out of `max_rounds`: ≥90% / ≥70% / ≥50% / below.
    ///
    /// Compared in integer space so 9/10 lands exactly on the 90% boundary.
    pub fn for_score(score: usize, max_rounds: usize) -> Self {
        let pct100 = score * 100;
        if pct100 >= 90 * max_rounds {
            PerformanceTier::Excellent
        } else if pct100 >= 70 * max_rounds {
            PerformanceTier::Great
        } else if pct100 >= 50 * max_rounds {
            PerformanceTier::Good
        } else {
            PerformanceTier::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::Excellent =>
                "Excellent! You're a fraction problem-solving expert!",
            PerformanceTier::Great =>
                "Great job! You can confidently solve fraction word problems!",
            PerformanceTier::Good =>
                "Good effort! Practice more fraction word problems to improve.",
            PerformanceTier::KeepPracticing =>
                "Keep practicing! Solving fraction word problems gets easier with practice.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: usize,
    pub max_rounds: usize,
    pub percentage: f64,
    pub tier: PerformanceTier,
    pub message: String,
}

impl SessionSummary {
    pub fn new(score: usize, max_rounds: usize) -> Self {
        let tier = PerformanceTier::for_score(score, max_rounds);
        let percentage = if max_rounds == 0 {
            0.0
        } else {
            score as f64 * 100.0 / max_rounds as f64
        };
        SessionSummary {
            score,
            max_rounds,
            percentage,
            tier,
            message: tier.message().to_string(),
        }
    }
}
