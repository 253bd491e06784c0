use crate::ast::UnaryOperator;

/// Evaluates a unary operation on a number.
///
/// Supported operators:
/// - `Identity`: returns the operand unchanged.
/// - `Negate`: numeric negation.
/// - `Function(f)`: applies `f`, see [`crate::ast::Function::apply`].
#[must_use]
pub fn eval_unary(op: UnaryOperator, operand: f64) -> f64 {
    match op {
        UnaryOperator::Identity => operand,
        UnaryOperator::Negate => -operand,
        UnaryOperator::Function(function) => function.apply(operand),
    }
}
