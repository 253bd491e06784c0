use crate::ast::BinaryOperator;

/// Evaluates a binary operation between two numbers.
///
/// Division follows IEEE-754: a nonzero value divided by zero is a signed
/// infinity and `0 / 0` is NaN. `a e b` is `a * 10^b`.
///
/// # Example
/// ```
/// use calcrs::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, -3.0), 0.125);
/// assert_eq!(eval_binary(BinaryOperator::Sci, 1.5, 3.0), 1500.0);
/// assert!(eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
        BinaryOperator::Sci => left * 10_f64.powf(right),
    }
}
