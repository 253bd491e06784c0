/// Binary operator evaluation logic.
///
/// Applies the arithmetic operators, exponentiation and scientific notation to
/// two already-evaluated operands.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity, negation and function application.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk and the result type shared by the evaluator.
pub mod core;

/// Function evaluation.
///
/// Maps each named function onto its `f64` counterpart.
pub mod function;

pub use self::core::{EvalResult, evaluate};
