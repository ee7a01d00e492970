//! Fraction values, simplification, and the canonical string form.
//!
//! The canonical string is the identity used for answer comparison, so
//! [`simplify`] and [`format_display`] are exact inverses:
//!
//! | Value        | Canonical  | Display form |
//! |--------------|------------|--------------|
//! | 0            | `"0"`      | `Whole`      |
//! | 10/1         | `"10"`     | `Whole`      |
//! | -3/4         | `"-3/4"`   | `Proper`     |
//! | 9/4          | `"2 1/4"`  | `Mixed`      |

use std::str::FromStr;

use crate::quiz_engine::{
    error::QuizError,
    models::{FractionValue, StructuredFraction},
};

/// Greatest common divisor by the Euclidean algorithm; `gcd(a, 0) == a`.
pub fn gcd(a: u128, b: u128) -> u128 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduce `numerator / denominator` to its canonical mixed/proper/whole string.
///
/// # Panics
///
/// If `denominator` is zero. Callers inside the crate only pass denominators
/// taken from a [`FractionValue`], which cannot hold zero.
pub fn simplify(numerator: i128, denominator: i128) -> String {
    assert!(denominator != 0, "simplify called with a zero denominator");
    if numerator == 0 {
        return "0".to_string();
    }

    let sign = if (numerator < 0) != (denominator < 0) { "-" } else { "" };
    let n = numerator.unsigned_abs();
    let d = denominator.unsigned_abs();

    if n % d == 0 {
        return format!("{sign}{}", n / d);
    }

    let g = gcd(n, d);
    let (n, d) = (n / g, d / g);
    let whole = n / d;
    let remainder = n % d;

    if whole > 0 {
        format!("{sign}{whole} {remainder}/{d}")
    } else {
        format!("{sign}{remainder}/{d}")
    }
}

/// Split a canonical string into whole / numerator / denominator parts.
///
/// Accepts exactly the strings [`simplify`] can produce whose parts fit in 64
/// bits; anything else (unreduced, improper, padded, `"-0"`) is `MalformedFraction`.
pub fn format_display(canonical: &str) -> Result<StructuredFraction, QuizError> {
    let malformed = || QuizError::MalformedFraction(canonical.to_string());

    let (negative, body) = match canonical.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, canonical),
    };

    let parsed = match body.split_once(' ') {
        None => match body.split_once('/') {
            None => {
                let magnitude = i64::try_from(parse_digits::<u64>(body).ok_or_else(malformed)?)
                    .map_err(|_| malformed())?;
                StructuredFraction::Whole { value: if negative { -magnitude } else { magnitude } }
            }
            Some((n, d)) => StructuredFraction::Proper {
                negative,
                numerator: parse_digits(n).ok_or_else(malformed)?,
                denominator: parse_digits(d).ok_or_else(malformed)?,
            },
        },
        Some((w, frac)) => {
            let (n, d) = frac.split_once('/').ok_or_else(malformed)?;
            StructuredFraction::Mixed {
                negative,
                whole: parse_digits(w).ok_or_else(malformed)?,
                numerator: parse_digits(n).ok_or_else(malformed)?,
                denominator: parse_digits(d).ok_or_else(malformed)?,
            }
        }
    };

    let reduced = match parsed {
        StructuredFraction::Whole { .. } => true,
        StructuredFraction::Proper { numerator, denominator, .. } =>
            is_proper_in_lowest_terms(numerator, denominator),
        StructuredFraction::Mixed { whole, numerator, denominator, .. } =>
            whole > 0 && is_proper_in_lowest_terms(numerator, denominator),
    };

    if reduced && parsed.to_string() == canonical {
        Ok(parsed)
    } else {
        Err(malformed())
    }
}

fn is_proper_in_lowest_terms(numerator: u64, denominator: u64) -> bool {
    numerator > 0 && numerator < denominator && gcd(numerator.into(), denominator.into()) == 1
}

fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FractionValue {
    /// Build a non-negative value; the denominator must be positive.
    pub fn new(whole: u32, numerator: u32, denominator: u32) -> Result<Self, QuizError> {
        if denominator == 0 {
            return Err(QuizError::MalformedFraction(format!("{whole} {numerator}/0")));
        }
        Ok(FractionValue { negative: false, whole, numerator, denominator })
    }

    pub fn is_zero(self) -> bool {
        self.whole == 0 && self.numerator == 0
    }

    /// Same magnitude, opposite sign. Zero stays unsigned.
    pub fn negated(self) -> Self {
        FractionValue { negative: !self.negative && !self.is_zero(), ..self }
    }

    /// Signed improper pair `(whole * d + n, d)`.
    pub fn to_improper(self) -> (i128, i128) {
        let d = i128::from(self.denominator);
        let n = i128::from(self.numerator) + i128::from(self.whole) * d;
        (if self.negative { -n } else { n }, d)
    }

    /// Carry any excess numerator into the whole part so that `numerator < denominator`.
    ///
    /// Fails only when the carried whole part no longer fits in `u32`.
    pub fn normalized(self) -> Result<Self, QuizError> {
        let carry = self.numerator / self.denominator;
        let whole = self
            .whole
            .checked_add(carry)
            .ok_or_else(|| QuizError::MalformedFraction(self.to_string()))?;
        Ok(FractionValue {
            whole,
            numerator: self.numerator % self.denominator,
            ..self
        })
    }

    /// The canonical string of this value.
    pub fn canonical(self) -> String {
        let (n, d) = self.to_improper();
        simplify(n, d)
    }
}

/// Parses `"w"`, `"n/d"` or `"w n/d"`, optionally prefixed with `-`.
///
/// Unreduced and improper forms (`"3/9"`, `"1 5/4"`) are accepted as written.
impl FromStr for FractionValue {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || QuizError::MalformedFraction(s.to_string());
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = body.split_whitespace();
        let first = parts.next().ok_or_else(malformed)?;
        let second = parts.next();
        if parts.next().is_some() {
            return Err(malformed());
        }

        let num = |t: &str| parse_digits::<u32>(t).ok_or_else(malformed);
        let value = match (first.split_once('/'), second) {
            (None, None) => FractionValue::new(num(first)?, 0, 1),
            (Some((n, d)), None) => FractionValue::new(0, num(n)?, num(d)?),
            (None, Some(frac)) => {
                let (n, d) = frac.split_once('/').ok_or_else(malformed)?;
                FractionValue::new(num(first)?, num(n)?, num(d)?)
            }
            (Some(_), Some(_)) => return Err(malformed()),
        }
        .map_err(|_| malformed())?;

        Ok(if negative { value.negated() } else { value })
    }
}

impl TryFrom<String> for FractionValue {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FractionValue> for String {
    fn from(value: FractionValue) -> Self {
        value.to_string()
    }
}
