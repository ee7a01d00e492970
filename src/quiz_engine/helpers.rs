//! Shared builders for assembling a round's option list.

use rand::Rng;

use crate::quiz_engine::{
    error::QuizError,
    fraction::format_display,
    models::QuizOption,
};

/// In-place Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Build one option from a canonical value string.
pub fn option(value: &str) -> Result<QuizOption, QuizError> {
    Ok(QuizOption {
        display: format_display(value)?,
        value: value.to_string(),
    })
}

/// Correct answer plus distractors, shuffled into presentation order.
pub fn build_options<R: Rng>(
    rng: &mut R,
    correct: &str,
    distractors: &[String],
) -> Result<Vec<QuizOption>, QuizError> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(option(correct)?);
    for d in distractors {
        options.push(option(d)?);
    }
    shuffle(rng, &mut options);
    Ok(options)
}
