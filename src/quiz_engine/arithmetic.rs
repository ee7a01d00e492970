use crate::quiz_engine::{
    fraction::{gcd, simplify},
    models::{FractionValue, Operator, ProblemTemplate},
};

/// Exact `f1 <op> f2` over a common denominator, returned as a canonical string.
///
/// Operands are at most `u32` in each part, so every intermediate fits in `i128`.
pub fn evaluate(f1: FractionValue, operator: Operator, f2: FractionValue) -> String {
    let (n1, d1) = f1.to_improper();
    let (n2, d2) = f2.to_improper();

    let common_d = d1 * d2 / gcd(d1.unsigned_abs(), d2.unsigned_abs()) as i128;
    let n1 = n1 * (common_d / d1);
    let n2 = n2 * (common_d / d2);

    let result = match operator {
        Operator::Add      => n1 + n2,
        Operator::Subtract => n1 - n2,
    };
    simplify(result, common_d)
}

/// Correct answer for a catalog problem.
pub fn solve(problem: &ProblemTemplate) -> String {
    evaluate(problem.operand_a, problem.operator, problem.operand_b)
}
