//! Wrong-answer generation from a fixed pool of plausible fraction strings.

use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{error::QuizError, fraction::format_display};

/// A deduplicated list of canonical fraction strings to draw distractors from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistractorPool {
    entries: Vec<String>,
}

impl DistractorPool {
    /// Build a pool, rejecting non-canonical entries and dropping duplicates.
    pub fn new<I, S>(entries: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.into();
            format_display(&entry)?;
            if !out.contains(&entry) {
                out.push(entry);
            }
        }
        Ok(DistractorPool { entries: out })
    }

    /// Canonical forms of the wrong options from the original activity.
    pub fn builtin() -> Self {
        let entries = [
            "2/7", "1/12", "5/12", "1/2", "1 1/4", "1/8", "3 1/4", "3 3/4",
            "4 1/2", "1/3", "1/6", "2/3", "2/9", "1/20", "7/9", "1 1/6",
            "2 1/6", "6 5/6", "3/20", "7/20", "1 1/12", "2 1/4", "5 1/12",
            "1/18", "1/9", "7 3/4", "1/4", "4 1/4",
        ];
        DistractorPool { entries: entries.iter().map(|s| s.to_string()).collect() }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that could serve as distractors for `correct`.
    pub fn available_for(&self, correct: &str) -> usize {
        self.entries.iter().filter(|e| e.as_str() != correct).count()
    }

    /// Fail with `DistractorPoolExhausted` unless `count` distractors exist for `correct`.
    pub fn ensure_supports(&self, correct: &str, count: usize) -> Result<(), QuizError> {
        let available = self.available_for(correct);
        if available < count {
            return Err(QuizError::DistractorPoolExhausted {
                correct: correct.to_string(),
                available,
                required: count,
            });
        }
        Ok(())
    }
}

/// Draw `count` unique pool entries, none equal to `correct`, by rejection sampling.
///
/// Returned in draw order. The pool is checked first, so an undersized pool is
/// an error rather than an endless loop.
pub fn generate_distractors<R: Rng>(
    rng: &mut R,
    correct: &str,
    pool: &DistractorPool,
    count: usize,
) -> Result<Vec<String>, QuizError> {
    pool.ensure_supports(correct, count)?;

    let entries = pool.entries();
    let mut picked: Vec<String> = Vec::with_capacity(count);
    let mut draws = 0usize;
    while picked.len() < count {
        let candidate = &entries[rng.gen_range(0..entries.len())];
        draws += 1;
        if candidate == correct || picked.contains(candidate) {
            continue;
        }
        picked.push(candidate.clone());
    }
    debug!(correct, draws, "picked distractors {:?}", picked);
    Ok(picked)
}
